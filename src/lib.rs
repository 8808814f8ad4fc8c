//! A Rust library for early-warning scoring of patient vital-sign series.
//!
//! A series of readings (one per time step) is turned into a 0–100 risk score,
//! a health score, a trend score and an ordered alert color. Tables are read
//! from CSV or Parquet and written back with the score columns appended.

pub mod algorithm;
pub mod annotate;
pub mod async_io;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod reader;
pub mod schema;
pub mod summary;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScoringConfig;
pub use error::{Result, ScoringError};
pub use models::{AlertColor, Reading, ScoreRecord};
pub use summary::ScoringSummary;

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Scoring entry points
pub use algorithm::{classify_reading, score_readings};
pub use annotate::{score_batch, score_batches, strip_score_columns};
pub use loader::{score_directory_parallel, score_file};

// Async functionality
pub use async_io::{read_table_async, score_file_async, score_files_async};
