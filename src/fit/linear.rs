//! Simple linear regression with fit-quality diagnostics.

use nalgebra::{DMatrix, DVector};

use crate::domain::{LinearFit, Series};
use crate::error::AppError;
use crate::math::solve_least_squares;

/// Relative spread below which the thickness axis counts as constant.
const DEGENERATE_X_REL: f64 = 1e-12;

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// Requirements on the inputs:
/// - equal lengths, at least 2 points
/// - all values finite
/// - non-constant `x` (a constant-thickness series has no defined slope)
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, AppError> {
    if x.len() != y.len() {
        return Err(AppError::new(
            3,
            format!(
                "Mismatched series lengths: {} thickness values vs {} WVTR values.",
                x.len(),
                y.len()
            ),
        ));
    }
    if x.len() < 2 {
        return Err(AppError::new(
            3,
            format!("Need at least 2 points to fit a line, got {}.", x.len()),
        ));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(AppError::new(3, "Non-finite value in series."));
    }

    let (x_min, x_max) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let scale = x_max.abs().max(x_min.abs()).max(1.0e-300);
    if (x_max - x_min) <= DEGENERATE_X_REL * scale {
        return Err(AppError::new(
            3,
            "Degenerate series: all thickness values are equal; slope is undefined.",
        ));
    }

    let n = x.len();
    let mut design = DMatrix::<f64>::zeros(n, 2);
    let mut obs = DVector::<f64>::zeros(n);
    for i in 0..n {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = x[i];
        obs[i] = y[i];
    }

    let beta = solve_least_squares(&design, &obs)
        .ok_or_else(|| AppError::new(4, "Least-squares solve failed (ill-conditioned series)."))?;
    let intercept = beta[0];
    let slope = beta[1];

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for i in 0..n {
        let y_fit = intercept + slope * x[i];
        ss_res += (y[i] - y_fit).powi(2);
        ss_tot += (y[i] - y_mean).powi(2);
    }

    // Constant-y data is a perfect horizontal fit: zero residuals, R² = 1.
    // The clamp only absorbs floating-point noise around the endpoints.
    let r_squared = if ss_tot <= 0.0 {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    if !(slope.is_finite() && intercept.is_finite()) {
        return Err(AppError::new(4, "Non-finite regression coefficients."));
    }

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit one experimental series.
pub fn fit_series(series: &Series) -> Result<LinearFit, AppError> {
    fit_line(&series.thickness_m, &series.wvtr).map_err(|e| {
        AppError::new(
            e.exit_code(),
            format!("{}: {e}", series.regime.display_name()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Regime;

    #[test]
    fn recovers_exact_line() {
        let x = [57e-6, 60e-6, 62e-6];
        let y: Vec<f64> = x.iter().map(|&h| 2.0e4 - 3.0e8 * h).collect();
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope + 3.0e8).abs() / 3.0e8 < 1e-9);
        assert!((fit.intercept - 2.0e4).abs() / 2.0e4 < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn matches_closed_form_on_1x_series() {
        // Closed-form least squares for the 1× thesis data:
        // slope = -33654/114 per µm = -2.952105...e8 per m, R² ≈ 0.9594.
        let x = [57e-6, 60e-6, 62e-6];
        let y = [3363.0, 2232.0, 1922.0];
        let fit = fit_line(&x, &y).unwrap();

        let expected_slope = -33654.0 / 114.0 * 1e6;
        assert!((fit.slope - expected_slope).abs() / expected_slope.abs() < 1e-6);
        assert!((fit.r_squared - 0.9594).abs() < 1e-3);
        assert!(fit.slope < 0.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = fit_line(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn rejects_single_point() {
        let err = fit_line(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn rejects_constant_thickness() {
        let err = fit_line(&[60e-6, 60e-6, 60e-6], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn constant_wvtr_is_a_perfect_horizontal_fit() {
        let fit = fit_line(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
        assert!(fit.slope.abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn refit_on_fitted_values_is_idempotent() {
        let x = [64e-6, 79e-6, 81e-6, 83e-6];
        let y = [1880.0, 452.0, 414.0, 212.0];
        let first = fit_line(&x, &y).unwrap();

        let y_hat: Vec<f64> = x.iter().map(|&h| first.predict(h)).collect();
        let second = fit_line(&x, &y_hat).unwrap();

        assert!((first.slope - second.slope).abs() / first.slope.abs() < 1e-9);
        assert!((first.intercept - second.intercept).abs() / first.intercept.abs() < 1e-9);
        assert!((second.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_series_tags_errors_with_regime() {
        let series = Series {
            regime: Regime::TwoX,
            thickness_m: vec![72e-6],
            wvtr: vec![2395.0],
        };
        let err = fit_series(&series).unwrap_err();
        assert!(format!("{err}").contains("2× Biopolymer-1"));
    }
}
