//! Trend penalty over a whole series
//!
//! Three series are tracked: systolic pressure, mean arterial pressure and
//! the shock index. Each one is smoothed with a trailing rolling mean,
//! differenced, signed so that clinical worsening is positive, and divided by
//! a high percentile of its own absolute slopes. The normalized slope is
//! clipped to `[0, 1]` and scaled by an equal share of the penalty budget.
//!
//! The percentile is a whole-series statistic, so no row's penalty is final
//! until every row has been seen.

pub mod statistics;

use log::{debug, warn};

use crate::algorithm::risk::shock_index_series;
use crate::config::TrendConfig;
use crate::models::Reading;
use statistics::{first_difference, percentile_linear, rolling_mean};

/// Direction in which a series worsens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Worsening {
    /// Falling values are worse (blood pressure)
    Decrease,
    /// Rising values are worse (shock index)
    Increase,
}

impl Worsening {
    /// Sign a slope so that worsening is positive
    #[must_use]
    pub fn sign(self, slope: f64) -> f64 {
        match self {
            Self::Decrease => -slope,
            Self::Increase => slope,
        }
    }
}

/// The series contributing to the trend penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSource {
    /// Raw systolic pressure
    Systolic,
    /// Raw mean arterial pressure
    MeanArterial,
    /// Shock index from raw pulse and systolic pressure
    ShockIndex,
}

impl TrendSource {
    /// All sources, in the order their contributions are summed
    pub const ALL: [Self; 3] = [Self::Systolic, Self::MeanArterial, Self::ShockIndex];

    /// Worsening direction of this source
    #[must_use]
    pub const fn worsening(self) -> Worsening {
        match self {
            Self::Systolic | Self::MeanArterial => Worsening::Decrease,
            Self::ShockIndex => Worsening::Increase,
        }
    }

    /// Extract the raw series from the readings
    #[must_use]
    pub fn series(self, readings: &[Reading]) -> Vec<Option<f64>> {
        match self {
            Self::Systolic => readings.iter().map(|r| r.systolic_mmhg).collect(),
            Self::MeanArterial => readings.iter().map(|r| r.map_mmhg).collect(),
            Self::ShockIndex => shock_index_series(readings),
        }
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect()
    }
}

/// Scaled contribution of one source to every row's penalty
#[derive(Debug, Clone, PartialEq)]
pub struct TrendComponent {
    /// Source of the series
    pub source: TrendSource,
    /// Normalization scale actually used
    pub scale: f64,
    /// Whether the scale fell back to the configured default
    pub fallback: bool,
    /// Per-row contribution in `[0, max_penalty / 3]`
    pub contributions: Vec<f64>,
}

/// Trend penalties of a whole series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPenalties {
    /// Per-source breakdown
    pub components: Vec<TrendComponent>,
    /// Per-row penalty in `[0, max_penalty]`
    pub per_row: Vec<f64>,
}

/// Computes trend penalties according to a `TrendConfig`
#[derive(Debug, Clone, Copy)]
pub struct TrendPenaltyEngine<'a> {
    config: &'a TrendConfig,
}

impl<'a> TrendPenaltyEngine<'a> {
    /// Create an engine for the given settings
    #[must_use]
    pub const fn new(config: &'a TrendConfig) -> Self {
        Self { config }
    }

    /// Share of the penalty budget given to each source
    #[must_use]
    pub fn share(&self) -> f64 {
        self.config.max_penalty / TrendSource::ALL.len() as f64
    }

    /// Smoothed slope of a series, signed so that worsening is positive
    #[must_use]
    pub fn signed_slopes(&self, values: &[Option<f64>], worsening: Worsening) -> Vec<f64> {
        let smoothed = rolling_mean(values, self.config.window);
        first_difference(&smoothed)
            .into_iter()
            .map(|d| worsening.sign(d))
            .collect()
    }

    /// Normalization scale of a signed slope series and whether it fell back
    #[must_use]
    pub fn scale(&self, signed: &[f64]) -> (f64, bool) {
        let magnitudes: Vec<f64> = signed.iter().map(|v| v.abs()).collect();
        match percentile_linear(&magnitudes, self.config.percentile) {
            Some(p) if p.is_finite() && p > 0.0 => (p, false),
            _ => (self.config.fallback_scale, true),
        }
    }

    /// Scaled contribution of one source
    #[must_use]
    pub fn component(&self, source: TrendSource, readings: &[Reading]) -> TrendComponent {
        let signed = self.signed_slopes(&source.series(readings), source.worsening());
        let (scale, fallback) = self.scale(&signed);

        if fallback && signed.iter().any(|v| !v.is_finite()) {
            warn!("Non-finite {source:?} slope in series, using fallback scale {scale}");
        }
        debug!("{source:?} trend scale {scale} (fallback: {fallback})");

        let share = self.share();
        let contributions = signed
            .iter()
            .map(|v| {
                let normalized = v / scale;
                if normalized.is_nan() {
                    0.0
                } else {
                    share * normalized.clamp(0.0, 1.0)
                }
            })
            .collect();

        TrendComponent {
            source,
            scale,
            fallback,
            contributions,
        }
    }

    /// Trend penalty of every row of a series
    #[must_use]
    pub fn penalties(&self, readings: &[Reading]) -> TrendPenalties {
        let components: Vec<TrendComponent> = TrendSource::ALL
            .into_iter()
            .map(|source| self.component(source, readings))
            .collect();

        let per_row = (0..readings.len())
            .map(|i| {
                let sum: f64 = components.iter().map(|c| c.contributions[i]).sum();
                sum.clamp(0.0, self.config.max_penalty)
            })
            .collect();

        TrendPenalties {
            components,
            per_row,
        }
    }
}
