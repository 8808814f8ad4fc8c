//! CSV table operations
//!
//! Schemas are inferred from the header and the data; the file is then read
//! a second time with the inferred schema.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::record_batch::RecordBatch;

use super::DEFAULT_BATCH_SIZE;
use crate::error::{Result, ScoringError};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a CSV file with a header row into Arrow record batches
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid CSV
pub fn read_csv(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading CSV file", path);

    let mut file = File::open(path).map_err(|e| ScoringError::io(path, e))?;
    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.seek(SeekFrom::Start(0))
        .map_err(|e| ScoringError::io(path, e))?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Write a record batch to a CSV file with a header row
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let start = std::time::Instant::now();
    let file = File::create(path).map_err(|e| ScoringError::io(path, e))?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(())
}
