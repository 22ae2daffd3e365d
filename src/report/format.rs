//! Terminal report formatting.

use crate::app::pipeline::RunOutput;
use crate::domain::Constants;

/// Format the full run summary (constants + per-regime fit diagnostics).
pub fn format_run_summary(run: &RunOutput, constants: &Constants) -> String {
    let mut out = String::new();

    out.push_str("=== wvtr - WVTR vs Coating Thickness ===\n");
    out.push_str(&format!(
        "Constants: Mw={} g/mol | Ci={} mol/m³ | Co={} mol/m³ | Hp={:.1} µm\n",
        constants.mw,
        constants.ci,
        constants.co,
        constants.hp * 1e6,
    ));

    let n_points: usize = run.analyses.iter().map(|a| a.series.len()).sum();
    out.push_str(&format!(
        "Series: {} regimes | {} measurements\n",
        run.analyses.len(),
        n_points
    ));

    out.push_str("\nFit diagnostics:\n");
    out.push_str(
        format!(
            "{:<26} {:>4} {:>14} {:>12} {:>6} {:>12}\n",
            "regime", "n", "slope", "intercept", "R²", "D (m²/s)"
        )
        .trim_end(),
    );
    out.push('\n');

    for a in &run.analyses {
        out.push_str(
            format!(
                "{:<26} {:>4} {:>14.4e} {:>12.1} {:>6.2} {:>12.2e}\n",
                a.series.regime.display_name(),
                a.series.len(),
                a.fit.slope,
                a.fit.intercept,
                a.fit.r_squared,
                a.diffusion,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Format the extracted-coefficient block: a header plus exactly five lines,
/// matching the thesis results section.
pub fn format_coefficients(run: &RunOutput, constants: &Constants) -> String {
    let mut out = String::new();
    out.push_str("Extracted diffusion coefficients (linear regression):\n");
    for a in &run.analyses {
        out.push_str(&format!(
            "{} = {:.2e} m²/s\n",
            a.series.regime.coefficient_label(),
            a.diffusion
        ));
    }
    out.push_str(&format!(
        "PLA Ds (impermeable) = {:.2e} m²/s\n",
        constants.d_pla_imperm
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use crate::domain::RunConfig;

    #[test]
    fn coefficient_block_has_header_and_five_lines() {
        let config = RunConfig::default();
        let run = run_analysis(&config).unwrap();
        let block = format_coefficients(&run, &config.constants);

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Extracted diffusion coefficients (linear regression):");
        assert_eq!(lines[1], "Biopolymer-1 Ds (1×) = 3.36e-8 m²/s");
        assert_eq!(lines[2], "Biopolymer-1 Ds (2×) = 9.18e-8 m²/s");
        assert_eq!(lines[3], "Biopolymer-1 Ds (3×) = 8.41e-8 m²/s");
        assert_eq!(lines[4], "PLA Ds (permeable) = 1.12e-7 m²/s");
        assert_eq!(lines[5], "PLA Ds (impermeable) = 1.00e-15 m²/s");
    }

    #[test]
    fn run_summary_lists_every_regime() {
        let config = RunConfig::default();
        let run = run_analysis(&config).unwrap();
        let summary = format_run_summary(&run, &config.constants);

        for a in &run.analyses {
            assert!(summary.contains(a.series.regime.display_name()));
        }
        assert!(summary.contains("Mw=18.01528 g/mol"));
        assert!(summary.contains("13 measurements"));
    }
}
