//! Utility modules for table I/O and logging

pub mod io;
pub mod logging;

// Re-export commonly used items
pub use io::{DEFAULT_BATCH_SIZE, TableFormat, read_table, write_table};
pub use logging::{log_operation_complete, log_operation_start, log_warning};
