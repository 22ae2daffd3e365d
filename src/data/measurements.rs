//! Experimental data (from the thesis).
//!
//! Each series pairs measured coating thicknesses with the measured WVTR at
//! that thickness. Thicknesses are recorded in µm in the lab notebook and
//! stored here in meters.

use crate::domain::{Regime, Series};

const MICRON: f64 = 1e-6;

/// 1× Biopolymer-1.
const H_1X_UM: [f64; 3] = [57.0, 60.0, 62.0];
const WVTR_1X: [f64; 3] = [3363.0, 2232.0, 1922.0];

/// 2× Biopolymer-1.
const H_2X_UM: [f64; 3] = [72.0, 74.0, 79.0];
const WVTR_2X: [f64; 3] = [2395.0, 1673.0, 1513.0];

/// 3× Biopolymer-1.
const H_3X_UM: [f64; 3] = [73.0, 76.0, 79.0];
const WVTR_3X: [f64; 3] = [2177.0, 1739.0, 1470.0];

/// 4× Biopolymer-1 + PLA.
const H_PLA_UM: [f64; 4] = [64.0, 79.0, 81.0, 83.0];
const WVTR_PLA: [f64; 4] = [1880.0, 452.0, 414.0, 212.0];

/// Build the series for one coating regime.
pub fn series(regime: Regime) -> Series {
    let (h_um, wvtr): (&[f64], &[f64]) = match regime {
        Regime::OneX => (&H_1X_UM, &WVTR_1X),
        Regime::TwoX => (&H_2X_UM, &WVTR_2X),
        Regime::ThreeX => (&H_3X_UM, &WVTR_3X),
        Regime::Pla => (&H_PLA_UM, &WVTR_PLA),
    };

    Series {
        regime,
        thickness_m: h_um.iter().map(|&h| h * MICRON).collect(),
        wvtr: wvtr.to_vec(),
    }
}

/// All four experimental series, in presentation order.
pub fn all_series() -> Vec<Series> {
    Regime::ALL.iter().map(|&r| series(r)).collect()
}
