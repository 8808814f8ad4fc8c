//! Parquet table operations
//!
//! This module provides utilities for reading and writing Parquet files and
//! for finding series files in a directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::{DEFAULT_BATCH_SIZE, TableFormat, get_batch_size};
use crate::error::{Result, ScoringError};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Validates that a directory exists and is a directory
///
/// # Errors
/// Returns an error if the directory does not exist or is not a directory
pub fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(ScoringError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        ));
    }
    Ok(())
}

/// Read a parquet file into Arrow record batches
///
/// # Errors
/// Returns an error if the file cannot be opened or if the Parquet file is invalid
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = File::open(path).map_err(|e| ScoringError::io(path, e))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE))
        .build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Write a record batch to a Parquet file
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let start = std::time::Instant::now();
    let file = File::create(path).map_err(|e| ScoringError::io(path, e))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(())
}

/// Find all CSV and Parquet files in a directory, sorted by name
///
/// # Errors
/// Returns an error if directory reading fails
pub fn find_table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for series files in", dir);
    validate_directory(dir)?;

    let entries = std::fs::read_dir(dir).map_err(|e| ScoringError::io(dir, e))?;
    let files = entries
        .map(|entry| entry.map(|e| e.path()).map_err(|e| ScoringError::io(dir, e)))
        .filter_ok(|path| path.is_file() && TableFormat::from_path(path).is_ok())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log_warning("No CSV or Parquet files found in directory", Some(dir));
    } else {
        log::info!("Found {} series files in {}", files.len(), dir.display());
    }

    Ok(files)
}
