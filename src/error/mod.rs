//! Error handling for vital-sign scoring.
//!
//! Input validation failures (missing schema columns, empty series) are kept
//! apart from computation and I/O failures so callers can tell a rejected
//! input from a broken run.

use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can occur while loading, scoring or writing a vital-sign series
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// One or more required columns are absent from the input table
    #[error("Missing required column(s): {}", .columns.join(", "))]
    MissingColumns {
        /// Names of the absent columns
        columns: Vec<String>,
    },

    /// The input series has no rows
    #[error("Input series is empty; at least one reading is required")]
    EmptyInput,

    /// Configuration values violate a scoring invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Per-row component arrays disagree in length
    #[error("Length mismatch: expected {expected} rows, got {actual}")]
    LengthMismatch {
        /// Number of rows in the series
        expected: usize,
        /// Number of values produced by a component
        actual: usize,
    },

    /// File extension is not a supported table format
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ScoringError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error rejected the input before any scoring took place
    #[must_use]
    pub const fn is_input_validation(&self) -> bool {
        matches!(self, Self::MissingColumns { .. } | Self::EmptyInput)
    }
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
