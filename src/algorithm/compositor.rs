//! Final score composition and alert classification
//!
//! Base risk, trend penalty and loss boost are computed independently over the
//! series and merged row by row here.

use log::info;

use super::loss_prior::loss_boosts;
use super::risk::{base_risks, row_risk};
use super::trend::TrendPenaltyEngine;
use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};
use crate::models::{AlertColor, Reading, ScoreRecord};

/// Combines per-row components into final scores
#[derive(Debug, Clone, Copy)]
pub struct ScoreCompositor<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ScoreCompositor<'a> {
    /// Create a compositor for the given configuration
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Compose the scores of one row
    ///
    /// `trend_score` is derived from the trend penalty alone, while
    /// `health_score` reflects the full total.
    #[must_use]
    pub fn compose(&self, base_risk: f64, trend_penalty: f64, loss_boost: f64) -> ScoreRecord {
        let total_risk = clip_score(base_risk + trend_penalty + loss_boost);
        ScoreRecord {
            base_risk,
            trend_penalty,
            loss_boost,
            total_risk,
            health_score: clip_score(100.0 - total_risk),
            trend_score: clip_score(100.0 - trend_penalty),
            alert_color: AlertColor::from_score(total_risk, &self.config.thresholds),
        }
    }

    /// Merge equally long component arrays row by row
    pub fn compose_all(
        &self,
        base: &[f64],
        trend: &[f64],
        loss: &[f64],
    ) -> Result<Vec<ScoreRecord>> {
        for actual in [trend.len(), loss.len()] {
            if actual != base.len() {
                return Err(ScoringError::LengthMismatch {
                    expected: base.len(),
                    actual,
                });
            }
        }

        Ok(base
            .iter()
            .zip(trend)
            .zip(loss)
            .map(|((&b, &t), &l)| self.compose(b, t, l))
            .collect())
    }
}

/// Clip a score to `[0, 100]`, mapping NaN to 0
#[must_use]
pub fn clip_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Score an ordered series of readings
///
/// The whole series must be present: trend normalization depends on every
/// row. An empty series is rejected before any scoring.
pub fn score_readings(readings: &[Reading], config: &ScoringConfig) -> Result<Vec<ScoreRecord>> {
    if readings.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let start = std::time::Instant::now();
    let base = base_risks(readings, &config.weights);
    let trend = TrendPenaltyEngine::new(&config.trend).penalties(readings);
    let loss = loss_boosts(readings, &config.loss_prior);

    let records = ScoreCompositor::new(config).compose_all(&base, &trend.per_row, &loss)?;
    info!(
        "Scored {} readings in {:?}",
        records.len(),
        start.elapsed()
    );
    Ok(records)
}

/// Classify a single reading without trend context
///
/// Only base risk and the loss boost contribute, so the result suits a reading
/// seen in isolation rather than as part of a series.
#[must_use]
pub fn classify_reading(reading: &Reading, config: &ScoringConfig) -> AlertColor {
    let base = row_risk(reading, &config.weights);
    let boost = config.loss_prior.reading_boost(reading);
    ScoreCompositor::new(config).compose(base, 0.0, boost).alert_color
}
