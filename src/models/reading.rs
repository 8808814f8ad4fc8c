//! Vital-sign reading model
//!
//! A `Reading` is one time step of a patient series. Every vital is optional;
//! a missing value is a distinct state and never stands in for zero.

use serde::{Deserialize, Serialize};

/// One time step of vital signs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Heart rate in beats per minute
    pub pulse_bpm: Option<f64>,
    /// Systolic blood pressure in mmHg
    pub systolic_mmhg: Option<f64>,
    /// Mean arterial pressure in mmHg
    pub map_mmhg: Option<f64>,
    /// Respiratory rate in breaths per minute
    pub resp_rate_bpm: Option<f64>,
    /// Peripheral oxygen saturation in percent
    pub spo2_percent: Option<f64>,
    /// Estimated blood loss in percent of circulating volume
    pub blood_loss_percent: Option<f64>,
}

impl Reading {
    /// Create a reading with every vital present
    #[must_use]
    pub const fn new(
        pulse_bpm: f64,
        systolic_mmhg: f64,
        map_mmhg: f64,
        resp_rate_bpm: f64,
        spo2_percent: f64,
        blood_loss_percent: f64,
    ) -> Self {
        Self {
            pulse_bpm: Some(pulse_bpm),
            systolic_mmhg: Some(systolic_mmhg),
            map_mmhg: Some(map_mmhg),
            resp_rate_bpm: Some(resp_rate_bpm),
            spo2_percent: Some(spo2_percent),
            blood_loss_percent: Some(blood_loss_percent),
        }
    }

    /// Blood loss with missing or non-finite values coerced to zero
    #[must_use]
    pub fn blood_loss_or_zero(&self) -> f64 {
        finite(self.blood_loss_percent).unwrap_or(0.0)
    }
}

/// Treat non-finite values as missing
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Mean arterial pressure estimated from systolic and diastolic pressure
#[must_use]
pub fn estimate_map(systolic: Option<f64>, diastolic: Option<f64>) -> Option<f64> {
    match (finite(systolic), finite(diastolic)) {
        (Some(sys), Some(dia)) => Some(dia + (sys - dia) / 3.0),
        _ => None,
    }
}
