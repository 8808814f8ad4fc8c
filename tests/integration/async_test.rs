use vital_alert::utils::io::write_table;
use vital_alert::{AlertColor, ScoringConfig, read_table_async, score_file, score_files_async};

use crate::utils::{CALM, SHOCKED, scratch_dir, vitals_batch};

/// The async and blocking paths produce the same summary
#[tokio::test]
async fn test_async_scoring_matches_blocking() -> vital_alert::Result<()> {
    let dir = scratch_dir("async");
    let input = dir.join("patient.parquet");
    write_table(&input, &vitals_batch(&[CALM, CALM, SHOCKED, CALM]))?;

    let config = ScoringConfig::default();
    let blocking = score_file(&input, &dir.join("blocking.parquet"), &config)?;
    let summaries =
        score_files_async(vec![(input.clone(), dir.join("async.parquet"))], &config).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0], blocking);
    Ok(())
}

#[tokio::test]
async fn test_async_reads_both_formats() -> vital_alert::Result<()> {
    let dir = scratch_dir("async-formats");
    let batch = vitals_batch(&[CALM, SHOCKED, CALM]);
    write_table(&dir.join("a.csv"), &batch)?;
    write_table(&dir.join("a.parquet"), &batch)?;

    let csv: usize = read_table_async(&dir.join("a.csv"))
        .await?
        .iter()
        .map(|b| b.num_rows())
        .sum();
    let parquet: usize = read_table_async(&dir.join("a.parquet"))
        .await?
        .iter()
        .map(|b| b.num_rows())
        .sum();
    assert_eq!(csv, 3);
    assert_eq!(parquet, 3);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_series_are_independent() -> vital_alert::Result<()> {
    let dir = scratch_dir("async-many");
    let calm = dir.join("calm.csv");
    let shocked = dir.join("shocked.csv");
    write_table(&calm, &vitals_batch(&[CALM; 4]))?;
    write_table(&shocked, &vitals_batch(&[SHOCKED; 4]))?;

    let summaries = score_files_async(
        vec![
            (calm, dir.join("out").join("calm.csv")),
            (shocked, dir.join("out").join("shocked.csv")),
        ],
        &ScoringConfig::default(),
    )
    .await?;

    // results keep the order of the jobs
    assert_eq!(summaries[0].peak_alert, AlertColor::White);
    assert_eq!(summaries[1].count(AlertColor::Brown), 4);
    Ok(())
}

#[tokio::test]
async fn test_async_failure_is_propagated() {
    let dir = scratch_dir("async-missing");
    let result = score_files_async(
        vec![(dir.join("absent.parquet"), dir.join("out.parquet"))],
        &ScoringConfig::default(),
    )
    .await;
    assert!(result.is_err());
}
