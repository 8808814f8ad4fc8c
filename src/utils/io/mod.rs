//! IO utilities for vital-sign tables
//!
//! Tables are read from and written to CSV or Parquet, chosen by file
//! extension.

pub mod csv;
pub mod parquet;

use std::path::Path;

use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScoringError};

pub use self::csv::{read_csv, write_csv};
pub use self::parquet::{
    find_table_files, read_parquet, validate_directory, write_parquet,
};

/// Default batch size for table reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var("VITAL_ALERT_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl TableFormat {
    /// Determine the format from a file extension
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for any extension other than `csv` or `parquet`
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(ScoringError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read a table in the format implied by its extension
pub fn read_table(path: &Path) -> Result<Vec<RecordBatch>> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => read_csv(path),
        TableFormat::Parquet => read_parquet(path),
    }
}

/// Write a table in the format implied by its extension
pub fn write_table(path: &Path, batch: &RecordBatch) -> Result<()> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => write_csv(path, batch),
        TableFormat::Parquet => write_parquet(path, batch),
    }
}
