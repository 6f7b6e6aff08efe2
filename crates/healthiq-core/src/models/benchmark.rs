use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a benchmark target comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BenchmarkSource {
    National,
    Regional,
    Organizational,
    Regulatory,
    Historical,
    Custom,
}

/// Which way a metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    #[default]
    HigherIsBetter,
    /// Inverse metric, e.g. critical findings rate.
    LowerIsBetter,
}

/// Benchmark status. `Above` means better than the target, whatever the
/// metric's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BenchmarkStatus {
    Above,
    At,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Improving,
    Steady,
    Declining,
}

/// A metric with its target and, once measured, its current value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkMetric {
    pub metric_id: String,
    pub metric_name: String,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub source: BenchmarkSource,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub historical_values: Vec<f64>,
    #[serde(default)]
    pub historical_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkCategory {
    pub id: String,
    pub name: String,
    pub metrics: Vec<BenchmarkMetric>,
}

/// Result of comparing a facility value against its target. Derived on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkComparison {
    pub metric_id: String,
    pub metric_name: String,
    pub facility_value: f64,
    pub benchmark_value: f64,
    pub percent_difference: f64,
    pub status: BenchmarkStatus,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkPerformance {
    pub category_id: String,
    pub category_name: String,
    pub aggregate_score: f64,
    pub benchmark_score: f64,
    pub metrics: Vec<BenchmarkComparison>,
}
