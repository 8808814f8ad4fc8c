//! Column schema of vital-sign tables
//!
//! Required columns must be present for a table to be scored; every other
//! column passes through untouched.

use arrow::datatypes::Schema;

use crate::error::{Result, ScoringError};

/// Heart rate column
pub const PULSE: &str = "pulse_bpm";
/// Systolic pressure column
pub const SYSTOLIC: &str = "systolic_mmHg";
/// Diastolic pressure column, only used to derive MAP
pub const DIASTOLIC: &str = "diastolic_mmHg";
/// Mean arterial pressure column
pub const MAP: &str = "MAP_mmHg";
/// Respiratory rate column
pub const RESP_RATE: &str = "resp_rate_bpm";
/// Oxygen saturation column
pub const SPO2: &str = "SpO2_percent";
/// Blood loss column, optional and defaulting to zero
pub const BLOOD_LOSS: &str = "blood_loss_percent";

/// Appended health score column
pub const HEALTH_SCORE: &str = "health_score";
/// Appended trend score column
pub const TREND_SCORE: &str = "trend_score";
/// Appended alert color column
pub const ALERT_COLOR: &str = "alert_color";

/// Columns that must exist in every input table
pub const REQUIRED_COLUMNS: [&str; 5] = [PULSE, SYSTOLIC, MAP, RESP_RATE, SPO2];

/// Columns appended by scoring, in output order
pub const SCORE_COLUMNS: [&str; 3] = [HEALTH_SCORE, TREND_SCORE, ALERT_COLOR];

/// Where the MAP values of a table come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSource {
    /// The `MAP_mmHg` column
    Column,
    /// Estimated from systolic and diastolic pressure
    DerivedFromDiastolic,
}

/// Result of validating a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitalSchema {
    /// Source of MAP values
    pub map_source: MapSource,
    /// Whether a blood loss column is present
    pub has_blood_loss: bool,
    /// Score columns already present from an earlier run
    pub stale_score_columns: Vec<String>,
}

/// Check that a schema carries every required column
///
/// When `derive_map` is set, a missing `MAP_mmHg` is accepted if
/// `diastolic_mmHg` is present.
pub fn validate_schema(schema: &Schema, derive_map: bool) -> Result<VitalSchema> {
    let has = |name: &str| schema.index_of(name).is_ok();

    let map_source = if !has(MAP) && derive_map && has(DIASTOLIC) {
        MapSource::DerivedFromDiastolic
    } else {
        MapSource::Column
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|&&name| !has(name))
        .filter(|&&name| !(name == MAP && map_source == MapSource::DerivedFromDiastolic))
        .map(|name| (*name).to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ScoringError::MissingColumns { columns: missing });
    }

    Ok(VitalSchema {
        map_source,
        has_blood_loss: has(BLOOD_LOSS),
        stale_score_columns: SCORE_COLUMNS
            .iter()
            .filter(|&&name| has(name))
            .map(|name| (*name).to_string())
            .collect(),
    })
}
