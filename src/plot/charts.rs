//! Plotters-powered SVG figures.
//!
//! Why the SVG backend?
//! - no native font/system dependencies (text becomes `<text>` elements)
//! - output is viewable everywhere and diff-friendly
//! - easy to extend later (PNG backend, annotations, etc.)
//!
//! Two figures are produced, mirroring the thesis results section:
//! - a 2×2 grid with one panel per coating regime
//! - a combined overlay of all regimes plus the impermeable reference

use std::path::Path;

use plotters::prelude::*;

use crate::app::pipeline::RunOutput;
use crate::domain::{Curve, Regime, RegimeAnalysis};
use crate::error::AppError;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

fn regime_color(regime: Regime) -> RGBColor {
    match regime {
        Regime::OneX => ORANGE,
        Regime::TwoX => BLUE,
        Regime::ThreeX => GREEN,
        Regime::Pla => RED,
    }
}

/// Render the 2×2 per-regime figure.
pub fn render_regime_grid(
    path: &Path,
    run: &RunOutput,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    draw_regime_grid(path, run, width, height)
        .map_err(|e| AppError::new(4, format!("Failed to render '{}': {e}", path.display())))
}

/// Render the combined overlay figure.
pub fn render_overlay(
    path: &Path,
    run: &RunOutput,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    draw_overlay(path, run, width, height)
        .map_err(|e| AppError::new(4, format!("Failed to render '{}': {e}", path.display())))
}

fn draw_regime_grid(
    path: &Path,
    run: &RunOutput,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(
        "WVTR vs Coating Thickness — Individual Coating Regimes",
        ("sans-serif", 28),
    )?;

    let panels = titled.split_evenly((2, 2));
    for (panel, analysis) in panels.iter().zip(&run.analyses) {
        let is_pla = analysis.series.regime == Regime::Pla;
        let imperm = if is_pla { Some(&run.impermeable) } else { None };

        let (x_range, y_range) = panel_bounds(analysis, imperm);
        let caption = format!(
            "{} (R² = {:.2})",
            analysis.series.regime.display_name(),
            analysis.fit.r_squared
        );

        let mut chart = ChartBuilder::on(panel)
            .caption(caption, ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(55)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc("Thickness (µm)")
            .y_desc("WVTR (g/m²·day)")
            .x_labels(6)
            .y_labels(6)
            .draw()?;

        let color = regime_color(analysis.series.regime);

        let line = chart.draw_series(LineSeries::new(
            curve_points_um(&analysis.line),
            color.stroke_width(2),
        ))?;
        if is_pla {
            line.label("PLA permeable").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
        }

        let measured = chart.draw_series(
            series_points_um(analysis)
                .into_iter()
                .map(|p| Circle::new(p, 4, color.filled())),
        )?;
        if is_pla {
            measured
                .label("Measured")
                .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
        }

        if let Some(imperm) = imperm {
            chart
                .draw_series(DashedLineSeries::new(
                    curve_points_um(imperm),
                    4,
                    3,
                    BLACK.stroke_width(1),
                ))?
                .label("PLA impermeable")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLACK));

            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_overlay(
    path: &Path,
    run: &RunOutput,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = overlay_bounds(run);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "WVTR vs Coating Thickness — All Coating Scenarios",
            ("sans-serif", 28),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Coating Thickness (µm)")
        .y_desc("WVTR (g/m²·day)")
        .draw()?;

    for analysis in &run.analyses {
        let color = regime_color(analysis.series.regime);

        chart
            .draw_series(
                series_points_um(analysis)
                    .into_iter()
                    .map(|p| Circle::new(p, 4, color.filled())),
            )?
            .label(analysis.series.regime.display_name())
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));

        let line = chart.draw_series(LineSeries::new(
            curve_points_um(&analysis.line),
            color.stroke_width(2),
        ))?;
        if analysis.series.regime == Regime::Pla {
            line.label("PLA permeable").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
        }
    }

    chart
        .draw_series(DashedLineSeries::new(
            curve_points_um(&run.impermeable),
            4,
            3,
            BLACK.stroke_width(1),
        ))?
        .label("PLA impermeable")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLACK));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Measured points in figure units (thickness in µm).
fn series_points_um(analysis: &RegimeAnalysis) -> Vec<(f64, f64)> {
    analysis
        .series
        .thickness_m
        .iter()
        .zip(&analysis.series.wvtr)
        .map(|(&h, &w)| (h * 1e6, w))
        .collect()
}

/// Sampled curve points in figure units (thickness in µm).
fn curve_points_um(curve: &Curve) -> Vec<(f64, f64)> {
    curve
        .thickness_m
        .iter()
        .zip(&curve.wvtr)
        .map(|(&h, &w)| (h * 1e6, w))
        .collect()
}

fn panel_bounds(
    analysis: &RegimeAnalysis,
    imperm: Option<&Curve>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut pts = series_points_um(analysis);
    pts.extend(curve_points_um(&analysis.line));
    if let Some(imperm) = imperm {
        pts.extend(curve_points_um(imperm));
    }
    bounds_of(&pts)
}

fn overlay_bounds(run: &RunOutput) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut pts = Vec::new();
    for analysis in &run.analyses {
        pts.extend(series_points_um(analysis));
        pts.extend(curve_points_um(&analysis.line));
    }
    pts.extend(curve_points_um(&run.impermeable));
    bounds_of(&pts)
}

fn bounds_of(pts: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in pts {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !(x_min.is_finite() && x_max.is_finite() && x_max > x_min) {
        x_min = 0.0;
        x_max = 1.0;
    }
    if !(y_min.is_finite() && y_max.is_finite() && y_max > y_min) {
        y_min = 0.0;
        y_max = 1.0;
    }
    let x_pad = (x_max - x_min) * 0.05;
    let y_pad = (y_max - y_min) * 0.05;
    (
        x_min - x_pad..x_max + x_pad,
        y_min - y_pad..y_max + y_pad,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use crate::domain::RunConfig;

    #[test]
    fn figures_render_to_svg() {
        let config = RunConfig::default();
        let run = run_analysis(&config).unwrap();

        let dir = std::env::temp_dir();
        let grid_path = dir.join("wvtr_test_regimes.svg");
        let overlay_path = dir.join("wvtr_test_overlay.svg");

        render_regime_grid(&grid_path, &run, 1400, 1000).unwrap();
        render_overlay(&overlay_path, &run, 1000, 700).unwrap();

        for path in [&grid_path, &overlay_path] {
            let contents = std::fs::read_to_string(path).unwrap();
            assert!(contents.contains("<svg"), "no svg root in {}", path.display());
            std::fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn bounds_pad_the_data_range() {
        let (x, y) = bounds_of(&[(0.0, 0.0), (10.0, 100.0)]);
        assert!(x.start < 0.0 && x.end > 10.0);
        assert!(y.start < 0.0 && y.end > 100.0);
    }
}
