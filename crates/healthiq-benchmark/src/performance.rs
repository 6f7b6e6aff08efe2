//! Category roll-up of benchmark comparisons.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthiq_core::models::benchmark::{
    BenchmarkCategory, BenchmarkComparison, BenchmarkPerformance, BenchmarkStatus,
};

use crate::compare::compare_current;
use crate::error::BenchmarkError;

/// Category scores are expressed against a perfect score of 100.
pub const BENCHMARK_SCORE: f64 = 100.0;

const MAX_POINTS: u32 = 3;

pub fn status_points(status: BenchmarkStatus) -> u32 {
    match status {
        BenchmarkStatus::Above => 3,
        BenchmarkStatus::At => 2,
        BenchmarkStatus::Below => 1,
    }
}

/// Share of the maximum status points the comparisons earn, 0–100.
pub fn aggregate_score(comparisons: &[BenchmarkComparison]) -> f64 {
    if comparisons.is_empty() {
        return 0.0;
    }
    let earned: u32 = comparisons.iter().map(|c| status_points(c.status)).sum();
    f64::from(earned) / (comparisons.len() as f64 * f64::from(MAX_POINTS)) * 100.0
}

/// Compare every measured metric in the category. Unmeasured metrics are
/// skipped.
pub fn evaluate_category(
    category: &BenchmarkCategory,
) -> Result<BenchmarkPerformance, BenchmarkError> {
    let mut metrics = Vec::new();
    for metric in &category.metrics {
        if let Some(comparison) = compare_current(metric)? {
            metrics.push(comparison);
        }
    }

    let aggregate_score = aggregate_score(&metrics);
    tracing::debug!(
        category_id = %category.id,
        measured = metrics.len(),
        total = category.metrics.len(),
        aggregate_score,
        "evaluated benchmark category"
    );

    Ok(BenchmarkPerformance {
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        aggregate_score,
        benchmark_score: BENCHMARK_SCORE,
        metrics,
    })
}

pub fn evaluate_categories(
    categories: &[BenchmarkCategory],
) -> Result<Vec<BenchmarkPerformance>, BenchmarkError> {
    categories.iter().map(evaluate_category).collect()
}

pub fn category_performance<'a>(
    performance: &'a [BenchmarkPerformance],
    category_id: &str,
) -> Option<&'a BenchmarkPerformance> {
    performance.iter().find(|p| p.category_id == category_id)
}

/// A below-benchmark metric, with the size of its shortfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImprovementArea {
    pub category_name: String,
    #[serde(flatten)]
    pub comparison: BenchmarkComparison,
    pub gap: f64,
}

/// Every below-benchmark metric across all categories, largest gap first.
pub fn improvement_areas(performance: &[BenchmarkPerformance]) -> Vec<ImprovementArea> {
    let mut areas: Vec<ImprovementArea> = performance
        .iter()
        .flat_map(|p| {
            p.metrics
                .iter()
                .filter(|m| m.status == BenchmarkStatus::Below)
                .map(|m| ImprovementArea {
                    category_name: p.category_name.clone(),
                    comparison: m.clone(),
                    gap: m.percent_difference.abs(),
                })
        })
        .collect();
    areas.sort_by(|a, b| b.gap.total_cmp(&a.gap));
    areas
}
