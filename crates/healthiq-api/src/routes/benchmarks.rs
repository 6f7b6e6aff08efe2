use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use healthiq_benchmark::catalog::metric_direction;
use healthiq_benchmark::compare::compare_metric;
use healthiq_benchmark::gaps::{
    analyze_gaps, improvement_target, PerformanceGap, DEFAULT_TIMEFRAME_MONTHS,
};
use healthiq_benchmark::performance::{evaluate_categories, improvement_areas, ImprovementArea};
use healthiq_benchmark::projection::{project_improvement, project_to_date, ImprovementProjection};
use healthiq_benchmark::stats::{
    apply_statistics, assessment_completion_rate, AuditScoreRecord, AuditStatistics,
};
use healthiq_core::models::assessment::Assessment;
use healthiq_core::models::benchmark::{
    BenchmarkCategory, BenchmarkComparison, BenchmarkMetric, BenchmarkPerformance,
};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub metric: BenchmarkMetric,
    /// Value to compare. Defaults to the metric's current value.
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    pub records: Vec<AuditScoreRecord>,
    #[serde(default)]
    pub total_scheduled: Option<u64>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResponse {
    pub statistics: AuditStatistics,
    pub categories: Vec<BenchmarkPerformance>,
    pub improvement_areas: Vec<ImprovementArea>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapsRequest {
    pub metrics: Vec<BenchmarkMetric>,
    #[serde(default)]
    pub timeframe_months: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedGap {
    #[serde(flatten)]
    pub gap: PerformanceGap,
    pub current_value: f64,
    pub target_value: f64,
    pub improvement_target: f64,
    pub timeframe_months: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub current: f64,
    pub target: f64,
    #[serde(default)]
    pub target_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub days_to_target: Option<u32>,
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<Vec<BenchmarkCategory>> {
    Json(state.catalog.as_ref().clone())
}

pub async fn compare(
    Json(req): Json<CompareRequest>,
) -> Result<Json<BenchmarkComparison>, ApiError> {
    let value = req.value.or(req.metric.current_value).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "no value to compare for metric '{}'",
            req.metric.metric_id
        ))
    })?;
    Ok(Json(compare_metric(&req.metric, value)?))
}

/// Turn raw audit scores into metric values, then evaluate the configured
/// catalog against them.
pub async fn performance(
    State(state): State<AppState>,
    Json(req): Json<PerformanceRequest>,
) -> Result<Json<PerformanceResponse>, ApiError> {
    let statistics = AuditStatistics::from_records(&req.records, req.total_scheduled);
    let assessment_completion = assessment_completion_rate(&req.assessments, jiff::Timestamp::now());

    let categories = apply_statistics(&state.catalog, &statistics, assessment_completion);
    let categories = evaluate_categories(&categories)?;
    let improvement_areas = improvement_areas(&categories);

    tracing::info!(
        audits = statistics.total_count,
        improvement_areas = improvement_areas.len(),
        "benchmark performance evaluated"
    );

    Ok(Json(PerformanceResponse {
        statistics,
        categories,
        improvement_areas,
    }))
}

pub async fn gaps(Json(req): Json<GapsRequest>) -> Result<Json<Vec<PlannedGap>>, ApiError> {
    let months = req.timeframe_months.unwrap_or(DEFAULT_TIMEFRAME_MONTHS);
    let gaps = analyze_gaps(&req.metrics)?;

    // analyze_gaps keeps measured metrics in input order.
    let measured = req
        .metrics
        .iter()
        .filter_map(|m| m.current_value.map(|v| (m, v)));

    let planned = gaps
        .into_iter()
        .zip(measured)
        .map(|(gap, (metric, current))| PlannedGap {
            gap,
            current_value: current,
            target_value: metric.target_value,
            improvement_target: improvement_target(
                current,
                metric.target_value,
                months,
                metric_direction(metric),
            ),
            timeframe_months: months,
        })
        .collect();

    Ok(Json(planned))
}

pub async fn projection(
    Json(req): Json<ProjectionRequest>,
) -> Result<Json<ImprovementProjection>, ApiError> {
    let projection = match (req.days_to_target, req.target_date) {
        (Some(days), _) => project_improvement(req.current, req.target, days)?,
        (None, Some(date)) => {
            let today = jiff::Zoned::now().date();
            project_to_date(req.current, req.target, today, date)?
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either targetDate or daysToTarget is required".to_string(),
            ));
        }
    };
    Ok(Json(projection))
}
