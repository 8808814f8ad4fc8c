//! Configuration for vital-sign scoring.
//!
//! Every constant of the scoring algorithm lives here as an immutable value.
//! `ScoringConfig::default()` carries the clinical defaults; a JSON file may
//! override any subset of them, after which the result is validated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Tolerance when checking that the aggregation weights sum to one
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Weights of the six sub-risks in the per-row base risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    /// Heart rate
    pub hr: f64,
    /// Systolic blood pressure
    pub sbp: f64,
    /// Mean arterial pressure
    pub map: f64,
    /// Respiratory rate
    pub rr: f64,
    /// Peripheral oxygen saturation
    pub spo2: f64,
    /// Shock index
    pub si: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            hr: 0.16,
            sbp: 0.20,
            map: 0.20,
            rr: 0.08,
            spo2: 0.08,
            si: 0.28,
        }
    }
}

impl RiskWeights {
    /// Sum of all six weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.hr + self.sbp + self.map + self.rr + self.spo2 + self.si
    }
}

/// Rolling-window trend penalty settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Rolling mean window size (in rows)
    pub window: usize,
    /// Percentile of absolute signed slopes used as the normalization scale
    pub percentile: f64,
    /// Upper bound of the combined per-row penalty, split evenly over the series
    pub max_penalty: f64,
    /// Normalization scale used when a series is degenerate
    pub fallback_scale: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 5,
            percentile: 95.0,
            max_penalty: 25.0,
            fallback_scale: 1.0,
        }
    }
}

/// One sigmoid ramp `amplitude * sigma((x - center) / width)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidRamp {
    /// Asymptotic height of the ramp
    pub amplitude: f64,
    /// Blood loss percentage at the ramp midpoint
    pub center: f64,
    /// Transition width in percentage points
    pub width: f64,
}

/// Blood-loss prior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LossPriorConfig {
    /// Ramps summed to form the boost
    pub ramps: Vec<SigmoidRamp>,
}

impl Default for LossPriorConfig {
    fn default() -> Self {
        Self {
            ramps: vec![
                SigmoidRamp {
                    amplitude: 8.0,
                    center: 15.0,
                    width: 2.0,
                },
                SigmoidRamp {
                    amplitude: 12.0,
                    center: 30.0,
                    width: 2.0,
                },
                SigmoidRamp {
                    amplitude: 18.0,
                    center: 40.0,
                    width: 2.0,
                },
            ],
        }
    }
}

/// Lower bounds of the alert bands above white
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Lower bound of yellow
    pub yellow: f64,
    /// Lower bound of orange
    pub orange: f64,
    /// Lower bound of red
    pub red: f64,
    /// Lower bound of brown
    pub brown: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            yellow: 12.0,
            orange: 30.0,
            red: 55.0,
            brown: 78.0,
        }
    }
}

/// Configuration for a scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base risk weights
    pub weights: RiskWeights,
    /// Trend penalty settings
    pub trend: TrendConfig,
    /// Blood-loss prior settings
    pub loss_prior: LossPriorConfig,
    /// Alert band boundaries
    pub thresholds: AlertThresholds,
    /// Derive `MAP_mmHg` from systolic and diastolic pressure when the column is absent
    pub derive_map_from_diastolic: bool,
    /// Worker threads for multi-file scoring (defaults to the number of CPUs)
    pub threads: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            trend: TrendConfig::default(),
            loss_prior: LossPriorConfig::default(),
            thresholds: AlertThresholds::default(),
            derive_map_from_diastolic: false,
            threads: None,
        }
    }
}

impl ScoringConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ScoringError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string and validate it
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of worker threads to use for multi-file scoring
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Check the invariants the scoring algorithm relies on
    pub fn validate(&self) -> Result<()> {
        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringError::InvalidConfig(format!(
                "risk weights must sum to 1.0, got {total}"
            )));
        }

        let t = &self.thresholds;
        let bounds = [0.0, t.yellow, t.orange, t.red, t.brown, 100.0];
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ScoringError::InvalidConfig(format!(
                "alert thresholds must be strictly increasing inside (0, 100): {t:?}"
            )));
        }

        let trend = &self.trend;
        if trend.window == 0 {
            return Err(ScoringError::InvalidConfig(
                "trend window must be at least 1".to_string(),
            ));
        }
        if !(trend.percentile > 0.0 && trend.percentile <= 100.0) {
            return Err(ScoringError::InvalidConfig(format!(
                "trend percentile must be in (0, 100], got {}",
                trend.percentile
            )));
        }
        if !(trend.max_penalty >= 0.0 && trend.fallback_scale > 0.0) {
            return Err(ScoringError::InvalidConfig(
                "trend max_penalty must be >= 0 and fallback_scale > 0".to_string(),
            ));
        }

        if let Some(ramp) = self.loss_prior.ramps.iter().find(|r| r.width <= 0.0) {
            return Err(ScoringError::InvalidConfig(format!(
                "loss prior ramp width must be positive: {ramp:?}"
            )));
        }

        if self.threads == Some(0) {
            return Err(ScoringError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
