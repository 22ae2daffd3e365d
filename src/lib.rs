//! `wvtr-diffusion` library crate.
//!
//! The binary (`wvtr`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI, notebooks, other coatings)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod physics;
pub mod plot;
pub mod report;
