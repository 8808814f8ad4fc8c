use vital_alert::algorithm::risk::{SubRisks, shock_index_risk};
use vital_alert::algorithm::{TrendPenaltyEngine, TrendSource};
use vital_alert::{AlertColor, Reading, ScoringConfig, classify_reading, score_batch, score_readings};

use crate::utils::{CALM, SHOCKED, print_batch_summary, string_column, vitals_batch};

fn reading(row: [f64; 6]) -> Reading {
    Reading::new(row[0], row[1], row[2], row[3], row[4], row[5])
}

/// Normal vitals carry no sub-risk at all
#[test]
fn test_calm_reading_is_white() {
    let config = ScoringConfig::default();
    let records = score_readings(&[reading(CALM)], &config).unwrap();

    let sub = SubRisks::of(&reading(CALM));
    assert_eq!(sub.weighted(&config.weights), 0.0);
    assert_eq!(records[0].alert_color, AlertColor::White);
    assert!((records[0].health_score - 100.0).abs() < 0.01);
    assert_eq!(records[0].trend_score, 100.0);
}

/// Shock vitals with 35 % blood loss reach the brown band
#[test]
fn test_shocked_reading_is_severe() {
    let config = ScoringConfig::default();
    let records = score_readings(&[reading(SHOCKED)], &config).unwrap();

    assert!(records[0].base_risk > 79.0 && records[0].base_risk < 80.0);
    assert!(records[0].alert_color >= AlertColor::Red);
    assert_eq!(records[0].alert_color, AlertColor::Brown);
    assert_eq!(classify_reading(&reading(SHOCKED), &config), AlertColor::Brown);
}

/// A single-row series has nothing to differentiate against
#[test]
fn test_single_row_has_no_trend() {
    let config = ScoringConfig::default();
    let records = score_readings(&[reading(SHOCKED)], &config).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].trend_penalty, 0.0);
    assert_eq!(records[0].trend_score, 100.0);
}

/// A systolic pressure of zero leaves the shock index undefined
#[test]
fn test_zero_systolic_has_no_shock_index_risk() {
    let config = ScoringConfig::default();
    let row = Reading::new(120.0, 0.0, 60.0, 22.0, 95.0, 0.0);

    let sub = SubRisks::of(&row);
    assert_eq!(sub.si, 0.0);
    assert_eq!(shock_index_risk(None), 0.0);
    // systolic at the saturated end of its curve
    assert_eq!(sub.sbp, 100.0);
    assert!(sub.hr > 0.0);
    assert!(sub.map > 0.0);

    let records = score_readings(&[row, row], &config).unwrap();
    assert!(records.iter().all(|r| r.total_risk.is_finite()));
}

/// Constant systolic pressure contributes no trend penalty
#[test]
fn test_constant_systolic_contributes_nothing() {
    let config = ScoringConfig::default();
    let readings: Vec<Reading> = (0..12)
        .map(|i| Reading::new(80.0 + f64::from(i), 120.0, 90.0, 16.0, 98.0, 0.0))
        .collect();

    let engine = TrendPenaltyEngine::new(&config.trend);
    let component = engine.component(TrendSource::Systolic, &readings);
    assert!(component.contributions.iter().all(|&c| c == 0.0));
}

/// A worsening series raises its alert over time and keeps the input columns
#[test]
fn test_deteriorating_series_escalates() {
    let rows: Vec<[f64; 6]> = (0..10)
        .map(|i| {
            let t = f64::from(i) / 9.0;
            [
                80.0 + 70.0 * t,
                120.0 - 45.0 * t,
                90.0 - 40.0 * t,
                16.0 + 24.0 * t,
                98.0 - 16.0 * t,
                35.0 * t,
            ]
        })
        .collect();
    let batch = vitals_batch(&rows);
    let (annotated, records) = score_batch(&batch, &ScoringConfig::default()).unwrap();
    print_batch_summary(&annotated);

    assert_eq!(annotated.num_rows(), 10);
    assert_eq!(records.first().unwrap().alert_color, AlertColor::White);
    assert_eq!(records.last().unwrap().alert_color, AlertColor::Brown);
    assert!(records.iter().any(|r| r.trend_penalty > 0.0));

    let colors = string_column(&annotated, "alert_color");
    assert_eq!(colors.first().map(String::as_str), Some("white"));
    assert_eq!(colors.last().map(String::as_str), Some("brown"));
}

/// The worst row in the middle of a series is flagged even if it recovers
#[test]
fn test_transient_spike_is_flagged() {
    let config = ScoringConfig::default();
    let mut readings = vec![reading(CALM); 6];
    readings[3] = reading(SHOCKED);

    let records = score_readings(&readings, &config).unwrap();
    assert_eq!(records[3].alert_color, AlertColor::Brown);
    assert!(records[5].alert_color < AlertColor::Red);
}
