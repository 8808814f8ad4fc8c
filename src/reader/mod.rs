//! Extraction of vital-sign readings from Arrow record batches.
//!
//! Vital columns of any numeric or string type are cast to `Float64`. Values
//! that cannot be parsed become missing, never zero.

use arrow::array::{Array, Float64Array};
use arrow::compute::{cast, concat_batches};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::{Result, ScoringError};
use crate::models::Reading;
use crate::models::reading::estimate_map;
use crate::schema::{self, MapSource, VitalSchema};

/// Concatenate the batches of one table into a single batch
///
/// # Errors
/// Returns an error if there are no batches or their schemas differ
pub fn concat_table(batches: &[RecordBatch]) -> Result<RecordBatch> {
    let first = batches.first().ok_or(ScoringError::EmptyInput)?;
    if batches.len() == 1 {
        return Ok(first.clone());
    }
    Ok(concat_batches(&first.schema(), batches)?)
}

/// Read a column as optional `f64` values, or all-missing if it is absent
pub fn numeric_column(batch: &RecordBatch, name: &str) -> Result<Vec<Option<f64>>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(vec![None; batch.num_rows()]);
    };

    let column = batch.column(idx);
    let converted = cast(column, &DataType::Float64)?;
    let values = converted
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| {
            ScoringError::Arrow(arrow::error::ArrowError::CastError(format!(
                "column '{name}' did not cast to Float64"
            )))
        })?;

    let coerced = values.null_count().saturating_sub(column.null_count());
    if coerced > 0 {
        warn!("Column '{name}': {coerced} non-numeric value(s) treated as missing");
    }

    Ok(values
        .iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect())
}

/// Build the ordered readings of a validated batch
pub fn readings_from_batch(batch: &RecordBatch, vital: &VitalSchema) -> Result<Vec<Reading>> {
    let pulse = numeric_column(batch, schema::PULSE)?;
    let systolic = numeric_column(batch, schema::SYSTOLIC)?;
    let map = match vital.map_source {
        MapSource::Column => numeric_column(batch, schema::MAP)?,
        MapSource::DerivedFromDiastolic => {
            let diastolic = numeric_column(batch, schema::DIASTOLIC)?;
            systolic
                .iter()
                .zip(&diastolic)
                .map(|(&sys, &dia)| estimate_map(sys, dia))
                .collect()
        }
    };
    let resp_rate = numeric_column(batch, schema::RESP_RATE)?;
    let spo2 = numeric_column(batch, schema::SPO2)?;
    let blood_loss = numeric_column(batch, schema::BLOOD_LOSS)?;

    Ok((0..batch.num_rows())
        .map(|i| Reading {
            pulse_bpm: pulse[i],
            systolic_mmhg: systolic[i],
            map_mmhg: map[i],
            resp_rate_bpm: resp_rate[i],
            spo2_percent: spo2[i],
            blood_loss_percent: blood_loss[i],
        })
        .collect())
}
