//! Anticipatory risk boost from estimated blood loss
//!
//! The boost is a sum of logistic ramps, by default centred near the 15 %,
//! 30 % and 40 % blood-loss marks, so alert levels move before the vitals
//! themselves decompensate.

use crate::config::{LossPriorConfig, SigmoidRamp};
use crate::models::Reading;

/// Logistic function `1 / (1 + e^-z)`
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl SigmoidRamp {
    /// Height of this ramp at blood loss `x`
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.amplitude * sigmoid((x - self.center) / self.width)
    }
}

impl LossPriorConfig {
    /// Boost for a blood-loss percentage
    #[must_use]
    pub fn boost(&self, blood_loss_percent: f64) -> f64 {
        self.ramps.iter().map(|r| r.eval(blood_loss_percent)).sum()
    }

    /// Boost for a reading, treating missing blood loss as zero
    #[must_use]
    pub fn reading_boost(&self, reading: &Reading) -> f64 {
        self.boost(reading.blood_loss_or_zero())
    }

    /// Upper bound of the boost
    #[must_use]
    pub fn max_boost(&self) -> f64 {
        self.ramps.iter().map(|r| r.amplitude.max(0.0)).sum()
    }
}

/// Boost for every reading, in series order
#[must_use]
pub fn loss_boosts(readings: &[Reading], config: &LossPriorConfig) -> Vec<f64> {
    readings.iter().map(|r| config.reading_boost(r)).collect()
}
