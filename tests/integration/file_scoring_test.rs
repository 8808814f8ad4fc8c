use vital_alert::schema::{ALERT_COLOR, HEALTH_SCORE, TREND_SCORE};
use vital_alert::utils::io::{read_table, write_table};
use vital_alert::{AlertColor, ScoringConfig, ScoringError, score_directory_parallel, score_file};

use crate::utils::{
    CALM, SHOCKED, column_names, float_column, scratch_dir, string_column, vitals_batch,
    with_leading_label,
};

#[test]
fn test_csv_series_keeps_columns_and_appends_scores() -> vital_alert::Result<()> {
    let dir = scratch_dir("csv");
    let input = dir.join("patient.csv");
    let output = dir.join("out").join("patient.csv");
    let batch = with_leading_label(&vitals_batch(&[CALM, CALM, SHOCKED]), "timestamp");
    write_table(&input, &batch)?;

    let summary = score_file(&input, &output, &ScoringConfig::default())?;
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.current_alert, AlertColor::Brown);
    assert_eq!(summary.first_peak_row, 2);

    let scored = read_table(&output)?;
    let scored = &scored[0];
    let names = column_names(scored);
    assert_eq!(names.first().map(String::as_str), Some("timestamp"));
    assert_eq!(&names[..7], &column_names(&batch)[..]);
    assert_eq!(&names[7..], &[HEALTH_SCORE, TREND_SCORE, ALERT_COLOR]);

    assert_eq!(string_column(scored, ALERT_COLOR), ["white", "white", "brown"]);
    let health = float_column(scored, HEALTH_SCORE);
    assert!(health.iter().all(|h| (0.0..=100.0).contains(h)));
    Ok(())
}

#[test]
fn test_parquet_output_from_csv_input() -> vital_alert::Result<()> {
    let dir = scratch_dir("parquet");
    let input = dir.join("patient.csv");
    let output = dir.join("patient.parquet");
    write_table(&input, &vitals_batch(&[CALM, SHOCKED]))?;

    score_file(&input, &output, &ScoringConfig::default())?;
    let scored = read_table(&output)?;
    let rows: usize = scored.iter().map(|b| b.num_rows()).sum();
    assert_eq!(rows, 2);
    assert_eq!(string_column(&scored[0], ALERT_COLOR), ["white", "brown"]);
    Ok(())
}

#[test]
fn test_rescoring_a_scored_file_is_stable() -> vital_alert::Result<()> {
    let dir = scratch_dir("rescore");
    let input = dir.join("patient.parquet");
    let first = dir.join("first.parquet");
    let second = dir.join("second.parquet");
    write_table(&input, &vitals_batch(&[CALM, CALM, SHOCKED, CALM]))?;

    let config = ScoringConfig::default();
    let a = score_file(&input, &first, &config)?;
    let b = score_file(&first, &second, &config)?;
    assert_eq!(a.alert_counts, b.alert_counts);

    let first = &read_table(&first)?[0];
    let second = &read_table(&second)?[0];
    assert_eq!(column_names(first), column_names(second));
    assert_eq!(
        float_column(first, TREND_SCORE),
        float_column(second, TREND_SCORE)
    );
    Ok(())
}

#[test]
fn test_missing_column_is_reported_by_name() {
    let dir = scratch_dir("missing");
    let input = dir.join("partial.csv");
    std::fs::write(
        &input,
        "pulse_bpm,systolic_mmHg,resp_rate_bpm\n80,120,16\n90,110,18\n",
    )
    .unwrap();

    let err = score_file(&input, &dir.join("out.csv"), &ScoringConfig::default()).unwrap_err();
    assert!(err.is_input_validation());
    match err {
        ScoringError::MissingColumns { columns } => {
            assert_eq!(columns, ["MAP_mmHg", "SpO2_percent"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.join("out.csv").exists());
}

#[test]
fn test_header_only_file_is_empty_input() {
    let dir = scratch_dir("empty");
    let input = dir.join("empty.csv");
    std::fs::write(
        &input,
        "pulse_bpm,systolic_mmHg,MAP_mmHg,resp_rate_bpm,SpO2_percent\n",
    )
    .unwrap();

    let err = score_file(&input, &dir.join("out.csv"), &ScoringConfig::default()).unwrap_err();
    assert!(err.is_input_validation());
}

#[test]
fn test_map_derived_from_diastolic_when_enabled() -> vital_alert::Result<()> {
    let dir = scratch_dir("derive-map");
    let input = dir.join("bp.csv");
    std::fs::write(
        &input,
        "pulse_bpm,systolic_mmHg,diastolic_mmHg,resp_rate_bpm,SpO2_percent\n\
         80,120,80,16,98\n\
         150,75,38,40,82\n",
    )
    .unwrap();

    let strict = ScoringConfig::default();
    assert!(matches!(
        score_file(&input, &dir.join("strict.csv"), &strict),
        Err(ScoringError::MissingColumns { .. })
    ));

    let config = ScoringConfig {
        derive_map_from_diastolic: true,
        ..ScoringConfig::default()
    };
    let summary = score_file(&input, &dir.join("derived.csv"), &config)?;
    assert_eq!(summary.rows, 2);
    assert!(summary.current_alert >= AlertColor::Red);
    Ok(())
}

#[test]
fn test_non_numeric_cells_are_missing() -> vital_alert::Result<()> {
    let dir = scratch_dir("garbage");
    let input = dir.join("noisy.csv");
    std::fs::write(
        &input,
        "pulse_bpm,systolic_mmHg,MAP_mmHg,resp_rate_bpm,SpO2_percent\n\
         80,120,90,16,98\n\
         ,120,90,16,98\n\
         85,n/a,88,17,97\n",
    )
    .unwrap();

    let summary = score_file(&input, &dir.join("out.csv"), &ScoringConfig::default())?;
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.peak_alert, AlertColor::White);
    Ok(())
}

#[test]
fn test_unsupported_extension() {
    let dir = scratch_dir("format");
    let input = dir.join("series.xlsx");
    std::fs::write(&input, "not a table").unwrap();
    let err = score_file(&input, &dir.join("out.csv"), &ScoringConfig::default()).unwrap_err();
    assert!(matches!(err, ScoringError::UnsupportedFormat(_)));
}

#[test]
fn test_directory_scoring_keeps_series_apart() -> vital_alert::Result<()> {
    let dir = scratch_dir("directory");
    let input_dir = dir.join("in");
    let output_dir = dir.join("out");
    std::fs::create_dir_all(&input_dir).unwrap();

    write_table(&input_dir.join("a.csv"), &vitals_batch(&[CALM, CALM, CALM]))?;
    write_table(&input_dir.join("b.parquet"), &vitals_batch(&[CALM, SHOCKED]))?;
    std::fs::write(input_dir.join("notes.txt"), "ignored").unwrap();

    let config = ScoringConfig {
        threads: Some(2),
        ..ScoringConfig::default()
    };
    let mut summaries = score_directory_parallel(&input_dir, &output_dir, &config)?;
    summaries.sort_by(|x, y| x.source.cmp(&y.source));

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].peak_alert, AlertColor::White);
    assert_eq!(summaries[1].peak_alert, AlertColor::Brown);
    assert!(output_dir.join("a.csv").exists());
    assert!(output_dir.join("b.parquet").exists());
    assert!(!output_dir.join("notes.txt").exists());
    Ok(())
}
