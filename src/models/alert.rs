//! Ordered alert levels derived from the total risk score

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AlertThresholds;

/// Alert levels, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertColor {
    /// No meaningful risk
    White = 0,
    /// Early warning
    Yellow = 1,
    /// Evolving instability
    Orange = 2,
    /// Critical
    Red = 3,
    /// Severe, decompensated
    Brown = 4,
}

impl AlertColor {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Brown,
    ];

    /// Classify a total risk score; a score equal to a boundary belongs to the higher band
    #[must_use]
    pub fn from_score(total: f64, thresholds: &AlertThresholds) -> Self {
        if total >= thresholds.brown {
            Self::Brown
        } else if total >= thresholds.red {
            Self::Red
        } else if total >= thresholds.orange {
            Self::Orange
        } else if total >= thresholds.yellow {
            Self::Yellow
        } else {
            Self::White
        }
    }

    /// Lowercase name as written to the `alert_color` column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for AlertColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown alert color '{s}'"))
    }
}
