//! Gap analysis and improvement targets.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthiq_core::models::benchmark::{BenchmarkMetric, Direction};

use crate::catalog::metric_direction;
use crate::error::BenchmarkError;

/// Share of the remaining gap a facility is expected to close each month.
pub const MONTHLY_IMPROVEMENT_RATE: f64 = 0.2;

pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 3;

const HIGH_PRIORITY_GAP: f64 = 15.0;
const MEDIUM_PRIORITY_GAP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GapPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PerformanceGap {
    pub metric_id: String,
    pub metric_name: String,
    /// Size of the gap as a percentage of the benchmark.
    pub gap: f64,
    /// True when the facility has not reached the benchmark.
    pub short_of_target: bool,
    pub priority: GapPriority,
    pub recommendation: String,
}

/// Signed gap as a percentage of the benchmark; positive when the facility
/// falls short. `None` for a zero or non-finite benchmark.
pub fn performance_gap(actual: f64, benchmark: f64, direction: Direction) -> Option<f64> {
    if benchmark == 0.0 || !benchmark.is_finite() {
        return None;
    }
    let shortfall = match direction {
        Direction::HigherIsBetter => benchmark - actual,
        Direction::LowerIsBetter => actual - benchmark,
    };
    Some(shortfall / benchmark * 100.0)
}

pub fn gap_priority(signed_gap: f64) -> GapPriority {
    if signed_gap > HIGH_PRIORITY_GAP {
        GapPriority::High
    } else if signed_gap > MEDIUM_PRIORITY_GAP {
        GapPriority::Medium
    } else {
        GapPriority::Low
    }
}

/// Recommendation text for a metric, by whether it is short of target.
pub fn recommendation(metric_id: &str, short_of_target: bool) -> &'static str {
    let (improve, maintain) = if metric_id.contains("audit-completion") {
        (
            "Increase audit completion rate by implementing automated reminders and scheduling tools.",
            "Maintain current audit completion processes while monitoring for quality.",
        )
    } else if metric_id.contains("documentation") {
        (
            "Improve documentation completeness through staff training and standardized templates.",
            "Sustain documentation quality while seeking opportunities for process efficiency.",
        )
    } else if metric_id.contains("staff") {
        (
            "Address staff performance gaps through targeted training and improved supervision.",
            "Continue staff development activities while celebrating performance achievements.",
        )
    } else if metric_id.contains("satisfaction") {
        (
            "Enhance patient experience through service improvements based on feedback analysis.",
            "Maintain high patient satisfaction while collecting more granular feedback data.",
        )
    } else {
        (
            "Analyze underlying factors and develop targeted improvement strategies.",
            "Analyze underlying factors and develop targeted improvement strategies.",
        )
    };
    if short_of_target { improve } else { maintain }
}

/// Gaps for every measured metric, in input order.
pub fn analyze_gaps(metrics: &[BenchmarkMetric]) -> Result<Vec<PerformanceGap>, BenchmarkError> {
    let mut gaps = Vec::new();
    for metric in metrics {
        let Some(actual) = metric.current_value else {
            continue;
        };
        let signed = performance_gap(actual, metric.target_value, metric_direction(metric))
            .ok_or_else(|| BenchmarkError::InvalidTarget {
                metric_id: metric.metric_id.clone(),
                target: metric.target_value,
            })?;
        let short_of_target = signed > 0.0;
        gaps.push(PerformanceGap {
            metric_id: metric.metric_id.clone(),
            metric_name: metric.metric_name.clone(),
            gap: signed.abs(),
            short_of_target,
            priority: gap_priority(signed),
            recommendation: recommendation(&metric.metric_id, short_of_target).to_string(),
        });
    }
    Ok(gaps)
}

/// Value the facility should aim for after `months`, closing
/// [`MONTHLY_IMPROVEMENT_RATE`] of the current gap per month without
/// overshooting the benchmark. A facility already at or better than the
/// benchmark keeps its current value.
pub fn improvement_target(current: f64, benchmark: f64, months: u32, direction: Direction) -> f64 {
    let monthly = |gap: f64| gap * MONTHLY_IMPROVEMENT_RATE * f64::from(months);
    match direction {
        Direction::HigherIsBetter => {
            if current >= benchmark {
                return current;
            }
            (current + monthly(benchmark - current)).min(benchmark)
        }
        Direction::LowerIsBetter => {
            if current <= benchmark {
                return current;
            }
            (current - monthly(current - benchmark)).max(benchmark)
        }
    }
}
