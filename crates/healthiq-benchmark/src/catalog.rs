//! Built-in benchmark categories and their targets.

use healthiq_core::models::benchmark::{
    BenchmarkCategory, BenchmarkMetric, BenchmarkSource, Direction,
};

pub mod category {
    pub const OPERATIONAL_EFFICIENCY: &str = "operational-efficiency";
    pub const QUALITY_COMPLIANCE: &str = "quality-compliance";
    pub const PERFORMANCE_TRENDS: &str = "performance-trends";
}

pub mod metric {
    pub const ASSESSMENT_COMPLETION: &str = "assessment-completion";
    pub const DOCUMENTATION_COMPLIANCE: &str = "documentation-compliance";
    pub const AUDIT_COMPLETION: &str = "audit-completion";
    pub const OVERALL_AUDIT_SCORE: &str = "overall-audit-score";
    pub const COMPLIANCE_RATE: &str = "compliance-rate";
    pub const CRITICAL_FINDINGS: &str = "critical-findings";
    pub const TREND_AUDIT_SCORE: &str = "trend-audit-score";
    pub const TREND_DOCUMENTATION_QUALITY: &str = "trend-documentation-quality";
}

/// Metric ids containing this marker are lower-is-better when no explicit
/// direction is given.
const INVERSE_MARKER: &str = "critical-findings";

pub fn infer_direction(metric_id: &str) -> Direction {
    if metric_id.contains(INVERSE_MARKER) {
        Direction::LowerIsBetter
    } else {
        Direction::HigherIsBetter
    }
}

/// The metric's explicit direction, or the one inferred from its id.
pub fn metric_direction(metric: &BenchmarkMetric) -> Direction {
    metric
        .direction
        .unwrap_or_else(|| infer_direction(&metric.metric_id))
}

fn target(
    id: &str,
    name: &str,
    target_value: f64,
    source: BenchmarkSource,
    description: &str,
) -> BenchmarkMetric {
    BenchmarkMetric {
        metric_id: id.to_string(),
        metric_name: name.to_string(),
        target_value,
        current_value: None,
        source,
        direction: Some(infer_direction(id)),
        description: Some(description.to_string()),
        historical_values: Vec::new(),
        historical_labels: Vec::new(),
    }
}

/// Default categories with unmeasured metrics.
pub fn default_categories() -> Vec<BenchmarkCategory> {
    vec![
        BenchmarkCategory {
            id: category::OPERATIONAL_EFFICIENCY.to_string(),
            name: "Operational Efficiency".to_string(),
            metrics: vec![
                target(
                    metric::ASSESSMENT_COMPLETION,
                    "Assessment Completion Rate",
                    90.0,
                    BenchmarkSource::Organizational,
                    "Percentage of required assessments completed on time",
                ),
                target(
                    metric::DOCUMENTATION_COMPLIANCE,
                    "Documentation Compliance",
                    90.0,
                    BenchmarkSource::National,
                    "Percentage of patient records with complete documentation",
                ),
                target(
                    metric::AUDIT_COMPLETION,
                    "Audit Completion Rate",
                    90.0,
                    BenchmarkSource::Organizational,
                    "Percentage of scheduled audits that were completed",
                ),
            ],
        },
        BenchmarkCategory {
            id: category::QUALITY_COMPLIANCE.to_string(),
            name: "Quality & Compliance".to_string(),
            metrics: vec![
                target(
                    metric::OVERALL_AUDIT_SCORE,
                    "Overall Audit Score",
                    80.0,
                    BenchmarkSource::National,
                    "Average score across all audit criteria",
                ),
                target(
                    metric::COMPLIANCE_RATE,
                    "Compliance Rate",
                    90.0,
                    BenchmarkSource::Regulatory,
                    "Percentage of criteria meeting regulatory requirements",
                ),
                target(
                    metric::CRITICAL_FINDINGS,
                    "Critical Findings Rate",
                    10.0,
                    BenchmarkSource::Organizational,
                    "Percentage of criteria with critical findings (lower is better)",
                ),
            ],
        },
        BenchmarkCategory {
            id: category::PERFORMANCE_TRENDS.to_string(),
            name: "Performance Trends".to_string(),
            metrics: vec![
                target(
                    metric::TREND_AUDIT_SCORE,
                    "Audit Score Trend",
                    80.0,
                    BenchmarkSource::Historical,
                    "Monthly average audit score over time",
                ),
                target(
                    metric::TREND_DOCUMENTATION_QUALITY,
                    "Documentation Quality Trend",
                    85.0,
                    BenchmarkSource::Historical,
                    "Monthly average documentation score over time",
                ),
            ],
        },
    ]
}
