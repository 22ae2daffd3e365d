//! Command-line parsing for the WVTR diffusion analysis tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "wvtr",
    version,
    about = "Water-vapor diffusion coefficients from WVTR measurements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full analysis: fit summary, extracted coefficients, and the two SVG figures.
    Fit(FitArgs),
    /// Print the extracted-coefficient block only (useful for scripting).
    Report(FitArgs),
}

/// Common options for the analysis run.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Directory the SVG figures are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip figure rendering.
    #[arg(long)]
    pub no_figures: bool,

    /// Also print per-regime ASCII plots to the terminal.
    #[arg(long)]
    pub ascii: bool,

    /// ASCII plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// ASCII plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Figure width (pixels).
    #[arg(long, default_value_t = 1400)]
    pub fig_width: u32,

    /// Figure height (pixels).
    #[arg(long, default_value_t = 1000)]
    pub fig_height: u32,
}
