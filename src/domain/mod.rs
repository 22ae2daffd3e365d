//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the coating regime identifiers (`Regime`)
//! - experimental series and fit outputs (`Series`, `LinearFit`)
//! - physical constants (`Constants`)
//! - derived per-regime analysis results (`RegimeAnalysis`, `Curve`)

pub mod types;

pub use types::*;
