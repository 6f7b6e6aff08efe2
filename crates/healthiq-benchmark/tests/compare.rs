use healthiq_benchmark::catalog::{infer_direction, metric_direction};
use healthiq_benchmark::compare::{classify_status, compare_current, compare_metric, percent_difference};
use healthiq_benchmark::error::BenchmarkError;
use healthiq_benchmark::trend::classify_trend;
use healthiq_core::models::benchmark::{
    BenchmarkMetric, BenchmarkSource, BenchmarkStatus, Direction, Trend,
};

fn metric(id: &str, target: f64) -> BenchmarkMetric {
    BenchmarkMetric {
        metric_id: id.to_string(),
        metric_name: id.to_string(),
        target_value: target,
        current_value: None,
        source: BenchmarkSource::Custom,
        direction: None,
        description: None,
        historical_values: Vec::new(),
        historical_labels: Vec::new(),
    }
}

#[test]
fn standard_metric_status_bands() {
    let d = Direction::HigherIsBetter;
    assert_eq!(classify_status(95.0, 90.0, d), BenchmarkStatus::Above);
    assert_eq!(classify_status(90.0, 90.0, d), BenchmarkStatus::Above);
    assert_eq!(classify_status(81.0, 90.0, d), BenchmarkStatus::At);
    assert_eq!(classify_status(80.9, 90.0, d), BenchmarkStatus::Below);
}

#[test]
fn inverse_metric_status_bands() {
    let d = Direction::LowerIsBetter;
    assert_eq!(classify_status(5.0, 10.0, d), BenchmarkStatus::Above);
    assert_eq!(classify_status(10.0, 10.0, d), BenchmarkStatus::Above);
    assert_eq!(classify_status(11.0, 10.0, d), BenchmarkStatus::At);
    assert_eq!(classify_status(11.5, 10.0, d), BenchmarkStatus::Below);
}

#[test]
fn value_equal_to_target_is_never_below() {
    for target in [0.0, 0.5, 10.0, 85.0, 100.0, 1e6] {
        for d in [Direction::HigherIsBetter, Direction::LowerIsBetter] {
            assert_ne!(classify_status(target, target, d), BenchmarkStatus::Below);
        }
    }
}

#[test]
fn percent_difference_is_positive_when_better() {
    let up = percent_difference(99.0, 90.0, Direction::HigherIsBetter).unwrap();
    assert!((up - 10.0).abs() < 1e-9);
    let down = percent_difference(81.0, 90.0, Direction::HigherIsBetter).unwrap();
    assert!((down + 10.0).abs() < 1e-9);
    let inverse = percent_difference(5.0, 10.0, Direction::LowerIsBetter).unwrap();
    assert!((inverse - 50.0).abs() < 1e-9);
}

#[test]
fn zero_target_has_no_percent_difference() {
    assert_eq!(percent_difference(5.0, 0.0, Direction::HigherIsBetter), None);
    assert_eq!(percent_difference(5.0, f64::NAN, Direction::LowerIsBetter), None);
}

#[test]
fn comparing_against_zero_target_is_an_error() {
    let err = compare_metric(&metric("custom-rate", 0.0), 12.0).unwrap_err();
    assert!(matches!(
        err,
        BenchmarkError::InvalidTarget { ref metric_id, target } if metric_id == "custom-rate" && target == 0.0
    ));
}

#[test]
fn direction_is_inferred_from_metric_id() {
    assert_eq!(infer_direction("critical-findings"), Direction::LowerIsBetter);
    assert_eq!(infer_direction("site-critical-findings-rate"), Direction::LowerIsBetter);
    assert_eq!(infer_direction("compliance-rate"), Direction::HigherIsBetter);

    let mut explicit = metric("critical-findings", 10.0);
    explicit.direction = Some(Direction::HigherIsBetter);
    assert_eq!(metric_direction(&explicit), Direction::HigherIsBetter);
}

#[test]
fn compare_metric_fills_every_field() {
    let mut m = metric("critical-findings", 10.0);
    m.historical_values = vec![20.0, 18.0, 12.0, 9.0];
    m.historical_labels = vec!["Jan".into(), "Feb".into(), "Mar".into(), "Apr".into()];

    let c = compare_metric(&m, 9.0).unwrap();
    assert_eq!(c.metric_id, "critical-findings");
    assert_eq!(c.facility_value, 9.0);
    assert_eq!(c.benchmark_value, 10.0);
    assert!((c.percent_difference - 10.0).abs() < 1e-9);
    assert_eq!(c.status, BenchmarkStatus::Above);
    assert_eq!(c.trend, Trend::Improving);
    assert_eq!(c.historical_labels.len(), 4);
}

#[test]
fn unmeasured_metric_has_no_comparison() {
    assert!(compare_current(&metric("compliance-rate", 90.0)).unwrap().is_none());

    let mut measured = metric("compliance-rate", 90.0);
    measured.current_value = Some(70.0);
    let c = compare_current(&measured).unwrap().unwrap();
    assert_eq!(c.status, BenchmarkStatus::Below);
}

#[test]
fn flat_series_is_steady() {
    assert_eq!(classify_trend(&[50.0, 50.0, 50.0, 50.0], Direction::HigherIsBetter), Trend::Steady);
    assert_eq!(classify_trend(&[50.0, 50.0, 50.0, 50.0], Direction::LowerIsBetter), Trend::Steady);
}

#[test]
fn increasing_series_depends_on_direction() {
    let rising = [60.0, 65.0, 70.0, 75.0, 80.0];
    assert_eq!(classify_trend(&rising, Direction::HigherIsBetter), Trend::Improving);
    assert_eq!(classify_trend(&rising, Direction::LowerIsBetter), Trend::Declining);

    let falling = [80.0, 75.0, 70.0];
    assert_eq!(classify_trend(&falling, Direction::HigherIsBetter), Trend::Declining);
    assert_eq!(classify_trend(&falling, Direction::LowerIsBetter), Trend::Improving);
}

#[test]
fn short_series_is_steady() {
    assert_eq!(classify_trend(&[], Direction::HigherIsBetter), Trend::Steady);
    assert_eq!(classify_trend(&[10.0], Direction::HigherIsBetter), Trend::Steady);
    assert_eq!(classify_trend(&[10.0, 90.0], Direction::HigherIsBetter), Trend::Steady);
}

#[test]
fn three_point_series_shares_its_middle_value() {
    // earlier = (40 + 60) / 2, recent = (60 + 80) / 2
    assert_eq!(classify_trend(&[40.0, 60.0, 80.0], Direction::HigherIsBetter), Trend::Improving);
    // earlier = (40 + 80) / 2 = recent = (80 + 40) / 2
    assert_eq!(classify_trend(&[40.0, 80.0, 40.0], Direction::HigherIsBetter), Trend::Steady);
}
