//! Logging utilities for operation reporting and progress tracking

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
pub use progress::{create_series_progress_bar, finish_progress_bar};
