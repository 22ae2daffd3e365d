//! Linear regression on thickness-vs-WVTR series.
//!
//! Responsibilities:
//!
//! - validate a series (equal lengths, n >= 2, non-constant thickness)
//! - solve the OLS problem and compute R²

pub mod linear;

pub use linear::*;
