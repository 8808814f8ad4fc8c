//! Annotated score model

use serde::{Deserialize, Serialize};

use super::alert::AlertColor;

/// Scores computed for one reading of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Weighted sum of the six sub-risks
    pub base_risk: f64,
    /// Trend penalty in `[0, max_penalty]`
    pub trend_penalty: f64,
    /// Blood-loss prior boost
    pub loss_boost: f64,
    /// Clipped total risk in `[0, 100]`
    pub total_risk: f64,
    /// `100 - total_risk`, clipped to `[0, 100]`
    pub health_score: f64,
    /// `100 - trend_penalty`, clipped to `[0, 100]`
    pub trend_score: f64,
    /// Alert band of `total_risk`
    pub alert_color: AlertColor,
}
