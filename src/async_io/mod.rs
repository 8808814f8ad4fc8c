//! Async table loading and scoring
//!
//! Parquet files are streamed with the async Arrow reader; CSV reading and
//! the scoring itself run on the blocking thread pool.

use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use futures::TryStreamExt;
use futures::future::try_join_all;
use parquet::arrow::async_reader::ParquetRecordBatchStreamBuilder;
use tokio::fs::File;

use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};
use crate::loader::score_and_write;
use crate::summary::ScoringSummary;
use crate::utils::io::{DEFAULT_BATCH_SIZE, TableFormat, get_batch_size, read_csv};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a Parquet file asynchronously into Arrow record batches
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid Parquet
pub async fn read_parquet_async(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading parquet file asynchronously", path);

    let file = File::open(path)
        .await
        .map_err(|e| ScoringError::io(path, e))?;

    let stream = ParquetRecordBatchStreamBuilder::new(file)
        .await?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE))
        .build()?;

    let batches = stream.try_collect::<Vec<_>>().await?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Read a CSV or Parquet table asynchronously
pub async fn read_table_async(path: &Path) -> Result<Vec<RecordBatch>> {
    match TableFormat::from_path(path)? {
        TableFormat::Parquet => read_parquet_async(path).await,
        TableFormat::Csv => {
            let owned = path.to_path_buf();
            tokio::task::spawn_blocking(move || read_csv(&owned))
                .await
                .map_err(|e| join_error(path, e))?
        }
    }
}

/// Read a file asynchronously, then score and write it on the blocking thread pool
pub async fn score_file_async(
    input: PathBuf,
    output: PathBuf,
    config: ScoringConfig,
) -> Result<ScoringSummary> {
    log_operation_start("Scoring series asynchronously", &input);
    let batches = read_table_async(&input).await?;

    let label = input.clone();
    tokio::task::spawn_blocking(move || score_and_write(&input, &batches, &output, &config))
        .await
        .map_err(|e| join_error(&label, e))?
}

/// Score several `(input, output)` pairs concurrently
///
/// # Errors
/// Returns the first error encountered; remaining results are discarded.
pub async fn score_files_async(
    jobs: Vec<(PathBuf, PathBuf)>,
    config: &ScoringConfig,
) -> Result<Vec<ScoringSummary>> {
    try_join_all(
        jobs.into_iter()
            .map(|(input, output)| score_file_async(input, output, config.clone())),
    )
    .await
}

fn join_error(path: &Path, e: tokio::task::JoinError) -> ScoringError {
    ScoringError::io(path, std::io::Error::other(e))
}
