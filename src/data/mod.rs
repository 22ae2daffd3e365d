//! The experimental WVTR measurements.

pub mod measurements;

pub use measurements::*;
