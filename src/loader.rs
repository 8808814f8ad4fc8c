//! File-level scoring
//!
//! One file holds one patient series. Files are scored independently of each
//! other; trend statistics never cross a file boundary.

use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use rayon::prelude::*;

use crate::annotate::score_batches;
use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};
use crate::summary::ScoringSummary;
use crate::utils::io::{find_table_files, read_table, write_table};
use crate::utils::logging::{
    create_series_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
};

/// Score the series stored in `input` and write the annotated table to `output`
///
/// The output format follows the output file extension, so a CSV series may
/// be written back as Parquet and vice versa.
///
/// # Errors
/// Returns an input validation error when the table lacks a required column or
/// has no rows, and an I/O error when reading or writing fails.
pub fn score_file(input: &Path, output: &Path, config: &ScoringConfig) -> Result<ScoringSummary> {
    log_operation_start("Scoring series", input);
    let batches = read_table(input)?;
    score_and_write(input, &batches, output, config)
}

/// Score an already loaded series and write the annotated table to `output`
pub fn score_and_write(
    input: &Path,
    batches: &[RecordBatch],
    output: &Path,
    config: &ScoringConfig,
) -> Result<ScoringSummary> {
    let start = std::time::Instant::now();
    let (annotated, records) = score_batches(batches, config)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ScoringError::io(parent, e))?;
    }
    write_table(output, &annotated)?;

    log_operation_complete("scored", input, records.len(), Some(start.elapsed()));
    ScoringSummary::from_records(&records, Some(input.to_path_buf())).ok_or(ScoringError::EmptyInput)
}

/// Output path for an input file placed in `output_dir`
#[must_use]
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    input
        .file_name()
        .map_or_else(|| output_dir.join("scored"), |name| output_dir.join(name))
}

/// Score every CSV or Parquet series in `input_dir` in parallel
///
/// Annotated tables are written to `output_dir` under their original file
/// names. The first failing file aborts the run.
///
/// # Errors
/// Returns an error if the directory cannot be read, the thread pool cannot be
/// built, or any series fails to score.
pub fn score_directory_parallel(
    input_dir: &Path,
    output_dir: &Path,
    config: &ScoringConfig,
) -> Result<Vec<ScoringSummary>> {
    let files = find_table_files(input_dir)?;
    if files.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(output_dir).map_err(|e| ScoringError::io(output_dir, e))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count())
        .build()
        .map_err(|e| ScoringError::InvalidConfig(format!("failed to build thread pool: {e}")))?;

    let pb = create_series_progress_bar(files.len() as u64, Some("scoring"));
    let results: Vec<Result<ScoringSummary>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let result = score_file(path, &output_path_for(path, output_dir), config);
                pb.inc(1);
                result
            })
            .collect()
    });
    finish_progress_bar(&pb, Some("done"));

    let summaries = results.into_iter().collect::<Result<Vec<_>>>()?;
    log::info!(
        "Scored {} series from {}",
        summaries.len(),
        input_dir.display()
    );
    Ok(summaries)
}
