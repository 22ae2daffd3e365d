//! Ordinary least squares solver.
//!
//! Each coating regime produces one tiny regression problem of the form:
//!
//! ```text
//! minimize Σ (y_i - (β0 + β1 x_i))^2
//! ```
//!
//! Implementation choices:
//! - We build the n×2 design matrix `[1, x_i]` and solve with SVD, which
//!   handles tall matrices robustly. (Nalgebra's `QR::solve` is intended for
//!   square systems and will panic for non-square matrices.)
//! - Thickness values sit around 1e-5 m while WVTR values sit around 1e3, so
//!   the design can be poorly scaled; we try progressively looser tolerances
//!   before giving up.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if no finite solution can be found. Note that SVD happily
/// returns a minimum-norm solution for rank-deficient systems, so the caller
/// is responsible for rejecting degenerate inputs (e.g., a constant-x series)
/// before interpreting the coefficients.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_handles_micrometer_scale_x() {
        // Same scale as the thesis data: x ~ 1e-5, y ~ 1e3.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 57e-6, 1.0, 60e-6, 1.0, 62e-6]);
        // Exact line y = 2e4 - 3e8 x.
        let y = DVector::from_row_slice(&[
            2.0e4 - 3.0e8 * 57e-6,
            2.0e4 - 3.0e8 * 60e-6,
            2.0e4 - 3.0e8 * 62e-6,
        ]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0e4).abs() < 1e-4);
        assert!((beta[1] + 3.0e8).abs() < 1e1);
    }
}
