//! Scoring of Arrow record batches
//!
//! The input table keeps every column in its original order; the three score
//! columns are appended at the end. Score columns left over from an earlier
//! run are stripped first, so re-scoring reproduces the same values.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::algorithm::score_readings;
use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};
use crate::models::ScoreRecord;
use crate::reader::{concat_table, readings_from_batch};
use crate::schema::{self, SCORE_COLUMNS, validate_schema};

/// Remove score columns produced by an earlier run
pub fn strip_score_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let schema = batch.schema();
    let keep: Vec<usize> = schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| !SCORE_COLUMNS.contains(&f.name().as_str()))
        .map(|(i, _)| i)
        .collect();

    if keep.len() == schema.fields().len() {
        return Ok(batch.clone());
    }
    Ok(batch.project(&keep)?)
}

/// Append the score columns to a batch
pub fn append_score_columns(batch: &RecordBatch, records: &[ScoreRecord]) -> Result<RecordBatch> {
    if records.len() != batch.num_rows() {
        return Err(ScoringError::LengthMismatch {
            expected: batch.num_rows(),
            actual: records.len(),
        });
    }

    let health: ArrayRef = Arc::new(Float64Array::from_iter_values(
        records.iter().map(|r| r.health_score),
    ));
    let trend: ArrayRef = Arc::new(Float64Array::from_iter_values(
        records.iter().map(|r| r.trend_score),
    ));
    let alert: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.alert_color.as_str()),
    ));

    let mut fields: Vec<Arc<Field>> = batch.schema().fields().iter().cloned().collect();
    fields.push(Arc::new(Field::new(schema::HEALTH_SCORE, DataType::Float64, false)));
    fields.push(Arc::new(Field::new(schema::TREND_SCORE, DataType::Float64, false)));
    fields.push(Arc::new(Field::new(schema::ALERT_COLOR, DataType::Utf8, false)));

    let mut columns = batch.columns().to_vec();
    columns.extend([health, trend, alert]);

    let schema = Schema::new_with_metadata(fields, batch.schema().metadata().clone());
    Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
}

/// Score one table held in a single batch
///
/// Returns the annotated batch together with the per-row score records.
///
/// # Errors
/// Fails with an input validation error when a required column is missing or
/// the batch has no rows.
pub fn score_batch(
    batch: &RecordBatch,
    config: &ScoringConfig,
) -> Result<(RecordBatch, Vec<ScoreRecord>)> {
    let vital = validate_schema(&batch.schema(), config.derive_map_from_diastolic)?;
    if batch.num_rows() == 0 {
        return Err(ScoringError::EmptyInput);
    }

    let batch = if vital.stale_score_columns.is_empty() {
        batch.clone()
    } else {
        warn!(
            "Replacing existing score column(s): {}",
            vital.stale_score_columns.join(", ")
        );
        strip_score_columns(batch)?
    };

    let readings = readings_from_batch(&batch, &vital)?;
    let records = score_readings(&readings, config)?;
    let annotated = append_score_columns(&batch, &records)?;
    Ok((annotated, records))
}

/// Score one table split over several batches
pub fn score_batches(
    batches: &[RecordBatch],
    config: &ScoringConfig,
) -> Result<(RecordBatch, Vec<ScoreRecord>)> {
    let table = concat_table(batches)?;
    score_batch(&table, config)
}
