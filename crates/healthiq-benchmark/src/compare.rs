//! Facility value versus benchmark target.

use healthiq_core::models::benchmark::{
    BenchmarkComparison, BenchmarkMetric, BenchmarkStatus, Direction,
};

use crate::catalog::metric_direction;
use crate::error::BenchmarkError;
use crate::trend::classify_trend;

/// Fraction of the target a value may miss by and still be `At`.
pub const AT_TOLERANCE: f64 = 0.1;

/// Percent by which the facility beats (positive) or trails (negative) the
/// target. `None` when the target is zero or not finite.
pub fn percent_difference(facility: f64, target: f64, direction: Direction) -> Option<f64> {
    if target == 0.0 || !target.is_finite() {
        return None;
    }
    let diff = match direction {
        Direction::HigherIsBetter => facility - target,
        Direction::LowerIsBetter => target - facility,
    };
    Some(diff / target * 100.0)
}

pub fn classify_status(facility: f64, target: f64, direction: Direction) -> BenchmarkStatus {
    match direction {
        Direction::HigherIsBetter => {
            if facility >= target {
                BenchmarkStatus::Above
            } else if facility >= target * (1.0 - AT_TOLERANCE) {
                BenchmarkStatus::At
            } else {
                BenchmarkStatus::Below
            }
        }
        Direction::LowerIsBetter => {
            if facility <= target {
                BenchmarkStatus::Above
            } else if facility <= target * (1.0 + AT_TOLERANCE) {
                BenchmarkStatus::At
            } else {
                BenchmarkStatus::Below
            }
        }
    }
}

/// Compare `facility_value` against the metric's target, classifying the
/// trend from the metric's historical series.
pub fn compare_metric(
    metric: &BenchmarkMetric,
    facility_value: f64,
) -> Result<BenchmarkComparison, BenchmarkError> {
    let direction = metric_direction(metric);
    let percent_difference = percent_difference(facility_value, metric.target_value, direction)
        .ok_or_else(|| BenchmarkError::InvalidTarget {
            metric_id: metric.metric_id.clone(),
            target: metric.target_value,
        })?;
    let status = classify_status(facility_value, metric.target_value, direction);
    let trend = classify_trend(&metric.historical_values, direction);

    tracing::debug!(
        metric_id = %metric.metric_id,
        facility_value,
        target = metric.target_value,
        ?status,
        ?trend,
        "compared metric against benchmark"
    );

    Ok(BenchmarkComparison {
        metric_id: metric.metric_id.clone(),
        metric_name: metric.metric_name.clone(),
        facility_value,
        benchmark_value: metric.target_value,
        percent_difference,
        status,
        trend,
        historical_values: metric.historical_values.clone(),
        historical_labels: metric.historical_labels.clone(),
    })
}

/// Compare a metric against its own current value. `Ok(None)` when the
/// metric has not been measured.
pub fn compare_current(
    metric: &BenchmarkMetric,
) -> Result<Option<BenchmarkComparison>, BenchmarkError> {
    metric
        .current_value
        .map(|value| compare_metric(metric, value))
        .transpose()
}
