//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the analysis pipeline
//! - prints the report (and optional terminal plots)
//! - writes the two SVG figures

use clap::Parser;

use crate::cli::{Command, FitArgs};
use crate::domain::{Constants, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// File names of the two figures, relative to `--out-dir`.
pub const REGIME_GRID_FILE: &str = "wvtr_regimes.svg";
pub const OVERLAY_FILE: &str = "wvtr_overlay.svg";

/// Entry point for the `wvtr` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `wvtr` (and `wvtr --ascii` etc.) to behave like
    // `wvtr fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the one-shot invocation the thesis workflow expects.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args, OutputMode::Full),
        Command::Report(args) => handle_fit(args, OutputMode::CoefficientsOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    CoefficientsOnly,
}

fn handle_fit(args: FitArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_analysis(&config)?;

    if mode == OutputMode::Full {
        println!(
            "{}",
            crate::report::format_run_summary(&run, &config.constants)
        );
    }

    print!(
        "{}",
        crate::report::format_coefficients(&run, &config.constants)
    );

    if mode == OutputMode::Full && config.ascii {
        for analysis in &run.analyses {
            println!();
            print!(
                "{}",
                crate::plot::render_ascii_plot(analysis, config.plot_width, config.plot_height)
            );
        }
    }

    if mode == OutputMode::Full && !config.no_figures {
        let grid_path = config.out_dir.join(REGIME_GRID_FILE);
        let overlay_path = config.out_dir.join(OVERLAY_FILE);

        crate::plot::render_regime_grid(&grid_path, &run, config.fig_width, config.fig_height)?;
        crate::plot::render_overlay(
            &overlay_path,
            &run,
            // The overlay is a single chart; shrink it relative to the grid.
            config.fig_width * 5 / 7,
            config.fig_height * 7 / 10,
        )?;

        println!();
        println!("Figures written:");
        println!("- {}", grid_path.display());
        println!("- {}", overlay_path.display());
    }

    Ok(())
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        constants: Constants::default(),
        out_dir: args.out_dir.clone(),
        no_figures: args.no_figures,
        ascii: args.ascii,
        plot_width: args.width,
        plot_height: args.height,
        fig_width: args.fig_width,
        fig_height: args.fig_height,
    }
}

/// Rewrite argv so `wvtr` defaults to `wvtr fit`.
///
/// Rules:
/// - `wvtr`                     -> `wvtr fit`
/// - `wvtr --ascii ...`         -> `wvtr fit --ascii ...`
/// - `wvtr --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "report");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(args(&["wvtr"])), args(&["wvtr", "fit"]));
    }

    #[test]
    fn leading_flag_gets_fit_inserted() {
        assert_eq!(
            rewrite_args(args(&["wvtr", "--ascii"])),
            args(&["wvtr", "fit", "--ascii"])
        );
    }

    #[test]
    fn explicit_subcommands_are_untouched() {
        assert_eq!(
            rewrite_args(args(&["wvtr", "report"])),
            args(&["wvtr", "report"])
        );
        assert_eq!(
            rewrite_args(args(&["wvtr", "--help"])),
            args(&["wvtr", "--help"])
        );
    }
}
