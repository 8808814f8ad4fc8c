//! Per-series summaries of a scoring run

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::{AlertColor, ScoreRecord};

/// Summary of one scored series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSummary {
    /// Source file, if the series came from one
    pub source: Option<PathBuf>,
    /// Number of rows scored
    pub rows: usize,
    /// Number of rows in each alert band, in ascending severity
    pub alert_counts: Vec<(AlertColor, usize)>,
    /// Highest total risk in the series
    pub peak_risk: f64,
    /// Most severe alert reached
    pub peak_alert: AlertColor,
    /// Alert of the last reading
    pub current_alert: AlertColor,
    /// Row index where the series first reached its peak alert
    pub first_peak_row: usize,
}

impl ScoringSummary {
    /// Summarize the records of a series; `None` for an empty series
    #[must_use]
    pub fn from_records(records: &[ScoreRecord], source: Option<PathBuf>) -> Option<Self> {
        let last = records.last()?;

        let mut counts: FxHashMap<AlertColor, usize> = FxHashMap::default();
        for record in records {
            *counts.entry(record.alert_color).or_insert(0) += 1;
        }

        let peak_alert = records
            .iter()
            .map(|r| r.alert_color)
            .max()
            .unwrap_or(AlertColor::White);
        let first_peak_row = records
            .iter()
            .position(|r| r.alert_color == peak_alert)
            .unwrap_or(0);
        let peak_risk = records
            .iter()
            .map(|r| r.total_risk)
            .fold(0.0_f64, f64::max);

        Some(Self {
            source,
            rows: records.len(),
            alert_counts: AlertColor::ALL
                .into_iter()
                .map(|c| (c, counts.get(&c).copied().unwrap_or(0)))
                .collect(),
            peak_risk,
            peak_alert,
            current_alert: last.alert_color,
            first_peak_row,
        })
    }

    /// Rows in the given alert band
    #[must_use]
    pub fn count(&self, color: AlertColor) -> usize {
        self.alert_counts
            .iter()
            .find(|(c, _)| *c == color)
            .map_or(0, |(_, n)| *n)
    }
}
