//! Vapor-diffusion physics: coefficient extraction and the impermeable
//! reference curve.

pub mod diffusion;

pub use diffusion::*;
