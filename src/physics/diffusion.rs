//! Diffusion-coefficient extraction and the two-layer series-resistance model.
//!
//! Both operations reduce to the same driving-force term `Mw * (Ci - Co)`:
//!
//! - extraction inverts the fitted slope: `D = Mw * (Ci - Co) / |slope|`
//! - the impermeable reference evaluates
//!   `WVTR(H) = Mw * (Ci - Co) / (Hp/D + H/D)`
//!
//! Units follow the thesis data as-is (WVTR in g/m²·day, thickness in m); no
//! day-to-second conversion is applied, so extracted coefficients are directly
//! comparable with the thesis results section.

use crate::domain::{Constants, Curve};
use crate::error::AppError;

/// Extract a diffusion coefficient from a fitted slope.
///
/// Precondition: the slope is physically expected to be *negative* (WVTR
/// falls as coating thickness grows). The absolute value tolerates a positive
/// slope, but a near-zero slope indicates a degenerate fit and is rejected
/// rather than producing infinity.
pub fn extract_diffusion(slope: f64, constants: &Constants) -> Result<f64, AppError> {
    if !slope.is_finite() {
        return Err(AppError::new(4, "Non-finite slope in diffusion extraction."));
    }
    if slope == 0.0 {
        return Err(AppError::new(
            4,
            "Zero slope in diffusion extraction (degenerate fit).",
        ));
    }
    Ok(constants.driving_force() / slope.abs())
}

/// Evaluate the impermeable-PLA reference WVTR over a thickness grid.
///
/// Two-layer series resistance: the base paper (`Hp`) and the coating (`H`)
/// both diffuse at `d`, so `WVTR(H) = Mw*(Ci-Co) / (Hp/d + H/d)`. Strictly
/// decreasing in `H` for positive `d`.
pub fn impermeable_curve(
    constants: &Constants,
    thickness_m: &[f64],
    d: f64,
) -> Result<Curve, AppError> {
    if !(d.is_finite() && d > 0.0) {
        return Err(AppError::new(
            4,
            format!("Impermeable diffusion coefficient must be positive, got {d}."),
        ));
    }

    let mut wvtr = Vec::with_capacity(thickness_m.len());
    for &h in thickness_m {
        if !(h.is_finite() && h >= 0.0) {
            return Err(AppError::new(
                4,
                format!("Invalid thickness {h} in impermeable curve."),
            ));
        }
        let resistance = constants.hp / d + h / d;
        wvtr.push(constants.driving_force() / resistance);
    }

    Ok(Curve {
        thickness_m: thickness_m.to_vec(),
        wvtr,
    })
}
