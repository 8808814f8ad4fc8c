//! Weighted per-row base risk
//!
//! Rows are independent of each other, so long series are scored in parallel.

use rayon::prelude::*;

use super::components::{
    heart_rate_risk, map_risk, resp_rate_risk, shock_index_risk, spo2_risk, systolic_risk,
};
use super::shock_index::reading_shock_index;
use crate::config::RiskWeights;
use crate::models::Reading;

/// Series shorter than this are scored sequentially
pub const PARALLEL_MIN_ROWS: usize = 4096;

/// The six sub-risks of one reading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubRisks {
    /// Heart rate
    pub hr: f64,
    /// Systolic pressure
    pub sbp: f64,
    /// Mean arterial pressure
    pub map: f64,
    /// Respiratory rate
    pub rr: f64,
    /// Oxygen saturation
    pub spo2: f64,
    /// Shock index
    pub si: f64,
}

impl SubRisks {
    /// Evaluate every sub-risk of a reading
    #[must_use]
    pub fn of(reading: &Reading) -> Self {
        Self {
            hr: heart_rate_risk(reading.pulse_bpm),
            sbp: systolic_risk(reading.systolic_mmhg),
            map: map_risk(reading.map_mmhg),
            rr: resp_rate_risk(reading.resp_rate_bpm),
            spo2: spo2_risk(reading.spo2_percent),
            si: shock_index_risk(reading_shock_index(reading)),
        }
    }

    /// Weighted sum of the sub-risks
    #[must_use]
    pub fn weighted(&self, weights: &RiskWeights) -> f64 {
        weights.hr * self.hr
            + weights.sbp * self.sbp
            + weights.map * self.map
            + weights.rr * self.rr
            + weights.spo2 * self.spo2
            + weights.si * self.si
    }
}

/// Base risk of a single reading
#[must_use]
pub fn row_risk(reading: &Reading, weights: &RiskWeights) -> f64 {
    SubRisks::of(reading).weighted(weights)
}

/// Base risk of every reading, in series order
#[must_use]
pub fn base_risks(readings: &[Reading], weights: &RiskWeights) -> Vec<f64> {
    if readings.len() < PARALLEL_MIN_ROWS {
        readings.iter().map(|r| row_risk(r, weights)).collect()
    } else {
        readings.par_iter().map(|r| row_risk(r, weights)).collect()
    }
}
