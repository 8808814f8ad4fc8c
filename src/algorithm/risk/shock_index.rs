//! Shock index derivation
//!
//! The shock index is heart rate divided by systolic pressure. It is undefined
//! whenever either input is missing or systolic pressure is not positive.

use crate::models::Reading;
use crate::models::reading::finite;

/// Shock index from raw pulse and systolic pressure
#[must_use]
pub fn shock_index(pulse_bpm: Option<f64>, systolic_mmhg: Option<f64>) -> Option<f64> {
    let pulse = finite(pulse_bpm)?;
    let systolic = finite(systolic_mmhg)?;
    if systolic <= 0.0 {
        return None;
    }
    Some(pulse / systolic).filter(|si| si.is_finite())
}

/// Shock index of a single reading
#[must_use]
pub fn reading_shock_index(reading: &Reading) -> Option<f64> {
    shock_index(reading.pulse_bpm, reading.systolic_mmhg)
}

/// Shock index for every reading of a series, gaps kept as `None`
#[must_use]
pub fn shock_index_series(readings: &[Reading]) -> Vec<Option<f64>> {
    readings.iter().map(reading_shock_index).collect()
}
