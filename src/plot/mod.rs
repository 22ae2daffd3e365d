//! Presentation layer: terminal plots and SVG figures.
//!
//! No computation happens here beyond mapping data coordinates to
//! screen/figure coordinates; all geometry is prepared by the pipeline.

pub mod ascii;
pub mod charts;

pub use ascii::*;
pub use charts::*;
