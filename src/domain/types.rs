//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory during fitting
//! - consumed by both the terminal report and the figure renderers

use std::path::PathBuf;

/// Coating regime of one experimental series.
///
/// The three biopolymer regimes differ only in the number of coating passes;
/// the fourth adds a PLA top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// 1× Biopolymer-1.
    OneX,
    /// 2× Biopolymer-1.
    TwoX,
    /// 3× Biopolymer-1.
    ThreeX,
    /// 4× Biopolymer-1 + PLA top layer.
    Pla,
}

impl Regime {
    pub const ALL: [Regime; 4] = [Regime::OneX, Regime::TwoX, Regime::ThreeX, Regime::Pla];

    /// Human-readable label for titles and legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Regime::OneX => "1× Biopolymer-1",
            Regime::TwoX => "2× Biopolymer-1",
            Regime::ThreeX => "3× Biopolymer-1",
            Regime::Pla => "4× Biopolymer-1 + PLA",
        }
    }

    /// Label used in the extracted-coefficient block.
    pub fn coefficient_label(self) -> &'static str {
        match self {
            Regime::OneX => "Biopolymer-1 Ds (1×)",
            Regime::TwoX => "Biopolymer-1 Ds (2×)",
            Regime::ThreeX => "Biopolymer-1 Ds (3×)",
            Regime::Pla => "PLA Ds (permeable)",
        }
    }

    /// Number of evenly spaced samples used when plotting this regime's
    /// fitted line. The PLA panel also carries the impermeable reference
    /// curve, so it gets a denser grid.
    pub fn line_samples(self) -> usize {
        match self {
            Regime::OneX | Regime::TwoX | Regime::ThreeX => 100,
            Regime::Pla => 200,
        }
    }
}

/// One experimental series: coating thickness (m) vs measured WVTR
/// (g/m²·day), both in measurement order.
#[derive(Debug, Clone)]
pub struct Series {
    pub regime: Regime,
    pub thickness_m: Vec<f64>,
    pub wvtr: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.thickness_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thickness_m.is_empty()
    }

    /// Observed thickness range, or `None` for an empty series.
    pub fn thickness_range(&self) -> Option<(f64, f64)> {
        let mut min_h = f64::INFINITY;
        let mut max_h = f64::NEG_INFINITY;
        for &h in &self.thickness_m {
            min_h = min_h.min(h);
            max_h = max_h.max(h);
        }
        if min_h.is_finite() && max_h.is_finite() {
            Some((min_h, max_h))
        } else {
            None
        }
    }
}

/// Ordinary least-squares line fit. Immutable once computed.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    /// Slope in (g/m²·day) per meter of coating thickness. Physically
    /// expected to be negative: WVTR falls as the coating grows.
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1].
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at thickness `h` (m).
    pub fn predict(&self, h: f64) -> f64 {
        self.slope * h + self.intercept
    }
}

/// A sampled polyline used for plotting (fitted lines and the impermeable
/// reference curve).
#[derive(Debug, Clone)]
pub struct Curve {
    pub thickness_m: Vec<f64>,
    pub wvtr: Vec<f64>,
}

/// Fixed physical constants (from the thesis).
#[derive(Debug, Clone, Copy)]
pub struct Constants {
    /// Molar mass of water, g/mol.
    pub mw: f64,
    /// Inner vapor concentration, mol/m³.
    pub ci: f64,
    /// Outer vapor concentration, mol/m³.
    pub co: f64,
    /// Base paper thickness, m.
    pub hp: f64,
    /// Diffusion coefficient of the impermeable-PLA reference, m²/s.
    pub d_pla_imperm: f64,
}

impl Constants {
    /// `Mw * (Ci - Co)`, the diffusive driving force shared by extraction
    /// and the series-resistance formula.
    pub fn driving_force(&self) -> f64 {
        self.mw * (self.ci - self.co)
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            mw: 18.015_28,
            ci: 1.1,
            co: 0.55,
            hp: 62.5e-6,
            d_pla_imperm: 1e-15,
        }
    }
}

/// Everything derived from one series: the fit, the extracted diffusion
/// coefficient, and the sampled fitted line for plotting.
#[derive(Debug, Clone)]
pub struct RegimeAnalysis {
    pub series: Series,
    pub fit: LinearFit,
    /// Extracted diffusion coefficient, m²/s.
    pub diffusion: f64,
    pub line: Curve,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub constants: Constants,

    /// Directory the two SVG figures are written to.
    pub out_dir: PathBuf,
    /// Skip figure rendering entirely.
    pub no_figures: bool,
    /// Also print per-regime ASCII plots to the terminal.
    pub ascii: bool,

    pub plot_width: usize,
    pub plot_height: usize,

    pub fig_width: u32,
    pub fig_height: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            constants: Constants::default(),
            out_dir: PathBuf::from("."),
            no_figures: false,
            ascii: false,
            plot_width: 100,
            plot_height: 25,
            fig_width: 1400,
            fig_height: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_thesis_values() {
        let c = Constants::default();
        assert!((c.mw - 18.01528).abs() < 1e-12);
        assert!((c.hp - 62.5e-6).abs() < 1e-18);
        assert!((c.driving_force() - 18.01528 * 0.55).abs() < 1e-9);
    }

    #[test]
    fn linear_fit_predicts_line() {
        let fit = LinearFit {
            slope: -2.0e8,
            intercept: 1.5e4,
            r_squared: 1.0,
        };
        let y = fit.predict(60e-6);
        assert!((y - (1.5e4 - 2.0e8 * 60e-6)).abs() < 1e-9);
    }

    #[test]
    fn thickness_range_spans_series() {
        let s = Series {
            regime: Regime::OneX,
            thickness_m: vec![57e-6, 60e-6, 62e-6],
            wvtr: vec![3363.0, 2232.0, 1922.0],
        };
        let (lo, hi) = s.thickness_range().unwrap();
        assert!((lo - 57e-6).abs() < 1e-18);
        assert!((hi - 62e-6).abs() < 1e-18);
    }
}
