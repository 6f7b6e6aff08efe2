//! Audit statistics and the metric values derived from them.
//!
//! Only real data fills a metric. When the statistics cannot support a
//! metric it keeps no current value and category evaluation skips it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthiq_core::models::assessment::Assessment;
use healthiq_core::models::benchmark::BenchmarkCategory;
use healthiq_core::models::status::ScheduleStatus;

use crate::catalog::metric;

/// A criterion averaging at least this meets its benchmark.
pub const CRITERION_BENCHMARK: f64 = 85.0;

/// A criterion averaging below this is a critical finding.
pub const CRITICAL_SCORE: f64 = 70.0;

/// One criterion score from one audit, as the audit statistics endpoint
/// returns it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditScoreRecord {
    pub audit_id: String,
    pub criteria_name: String,
    pub score: f64,
    #[serde(default)]
    pub audit_date: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CriterionAverage {
    pub name: String,
    pub average_score: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PeriodSummary {
    /// Month label, e.g. "Mar 2025".
    pub period: String,
    pub audit_count: u64,
    pub average_score: f64,
    pub documentation_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditStatistics {
    /// Distinct audits.
    pub total_count: u64,
    pub total_scheduled: Option<u64>,
    pub average_score: f64,
    pub criteria: Vec<CriterionAverage>,
    /// Chronological.
    pub periods: Vec<PeriodSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrendSeries {
    pub metric_id: String,
    pub periods: Vec<String>,
    pub values: Vec<f64>,
}

impl TrendSeries {
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Default)]
struct PeriodAcc<'a> {
    audits: BTreeSet<&'a str>,
    scores: Mean,
    documentation: Mean,
}

fn is_documentation(criteria_name: &str) -> bool {
    criteria_name.to_lowercase().contains("document")
}

fn percent(part: usize, whole: usize) -> f64 {
    (part as f64 / whole.max(1) as f64 * 100.0).round()
}

impl AuditStatistics {
    pub fn from_records(records: &[AuditScoreRecord], total_scheduled: Option<u64>) -> Self {
        let mut audits = BTreeSet::new();
        let mut overall = Mean::default();
        let mut criteria: BTreeMap<&str, Mean> = BTreeMap::new();
        let mut periods: BTreeMap<(i16, i8), PeriodAcc<'_>> = BTreeMap::new();

        for record in records {
            if !record.score.is_finite() {
                tracing::warn!(audit_id = %record.audit_id, "skipping non-finite audit score");
                continue;
            }
            audits.insert(record.audit_id.as_str());
            overall.add(record.score);
            criteria
                .entry(record.criteria_name.as_str())
                .or_default()
                .add(record.score);

            let Some(date) = record.audit_date else {
                continue;
            };
            let acc = periods.entry((date.year(), date.month())).or_default();
            acc.audits.insert(record.audit_id.as_str());
            acc.scores.add(record.score);
            if is_documentation(&record.criteria_name) {
                acc.documentation.add(record.score);
            }
        }

        let criteria = criteria
            .into_iter()
            .map(|(name, mean)| CriterionAverage {
                name: name.to_string(),
                average_score: mean.value().unwrap_or(0.0).round(),
                count: mean.count,
            })
            .collect();

        let periods = periods
            .into_iter()
            .map(|((year, month), acc)| PeriodSummary {
                period: jiff::civil::date(year, month, 1).strftime("%b %Y").to_string(),
                audit_count: acc.audits.len() as u64,
                average_score: acc.scores.value().unwrap_or(0.0),
                documentation_score: acc.documentation.value(),
            })
            .collect();

        Self {
            total_count: audits.len() as u64,
            total_scheduled,
            average_score: overall.value().unwrap_or(0.0).round(),
            criteria,
            periods,
        }
    }

    /// Completed audits over scheduled audits, capped at 100. Needs a
    /// non-zero scheduled count.
    pub fn audit_completion_rate(&self) -> Option<f64> {
        let scheduled = self.total_scheduled.filter(|&s| s > 0)?;
        Some(percent(self.total_count as usize, scheduled as usize).min(100.0))
    }

    pub fn documentation_compliance(&self) -> Option<f64> {
        self.criteria
            .iter()
            .find(|c| is_documentation(&c.name))
            .map(|c| c.average_score)
    }

    pub fn overall_audit_score(&self) -> Option<f64> {
        (self.total_count > 0).then_some(self.average_score)
    }

    /// Percentage of criteria averaging at or above [`CRITERION_BENCHMARK`].
    pub fn compliance_rate(&self) -> Option<f64> {
        if self.criteria.is_empty() {
            return None;
        }
        let meeting = self
            .criteria
            .iter()
            .filter(|c| c.average_score >= CRITERION_BENCHMARK)
            .count();
        Some(percent(meeting, self.criteria.len()))
    }

    /// Percentage of criteria averaging below [`CRITICAL_SCORE`].
    pub fn critical_findings_rate(&self) -> Option<f64> {
        if self.criteria.is_empty() {
            return None;
        }
        let critical = self
            .criteria
            .iter()
            .filter(|c| c.average_score < CRITICAL_SCORE)
            .count();
        Some(percent(critical, self.criteria.len()))
    }

    pub fn trend_series(&self) -> Vec<TrendSeries> {
        let audit_score = TrendSeries {
            metric_id: metric::TREND_AUDIT_SCORE.to_string(),
            periods: self.periods.iter().map(|p| p.period.clone()).collect(),
            values: self.periods.iter().map(|p| p.average_score).collect(),
        };
        let (periods, values) = self
            .periods
            .iter()
            .filter_map(|p| p.documentation_score.map(|s| (p.period.clone(), s)))
            .unzip();
        let documentation = TrendSeries {
            metric_id: metric::TREND_DOCUMENTATION_QUALITY.to_string(),
            periods,
            values,
        };
        vec![audit_score, documentation]
    }
}

/// Completed assessments over assessments that are due by `now`. `None`
/// when nothing is due yet.
pub fn assessment_completion_rate(assessments: &[Assessment], now: jiff::Timestamp) -> Option<f64> {
    let due: Vec<_> = assessments
        .iter()
        .filter(|a| a.status != ScheduleStatus::Scheduled || a.scheduled_date <= now)
        .collect();
    if due.is_empty() {
        return None;
    }
    let completed = due
        .iter()
        .filter(|a| a.status == ScheduleStatus::Completed)
        .count();
    Some(percent(completed, due.len()))
}

/// Fill current values (and history for trend metrics) into `categories`
/// from the statistics. Metrics the statistics cannot support are left
/// unmeasured.
pub fn apply_statistics(
    categories: &[BenchmarkCategory],
    stats: &AuditStatistics,
    assessment_completion: Option<f64>,
) -> Vec<BenchmarkCategory> {
    let trends = stats.trend_series();
    let mut updated = categories.to_vec();

    for m in updated.iter_mut().flat_map(|c| c.metrics.iter_mut()) {
        let value = match m.metric_id.as_str() {
            metric::ASSESSMENT_COMPLETION => assessment_completion,
            metric::DOCUMENTATION_COMPLIANCE => stats.documentation_compliance(),
            metric::AUDIT_COMPLETION => stats.audit_completion_rate(),
            metric::OVERALL_AUDIT_SCORE => stats.overall_audit_score(),
            metric::COMPLIANCE_RATE => stats.compliance_rate(),
            metric::CRITICAL_FINDINGS => stats.critical_findings_rate(),
            id => match trends.iter().find(|t| t.metric_id == id) {
                Some(series) => {
                    m.historical_values = series.values.clone();
                    m.historical_labels = series.periods.clone();
                    series.latest()
                }
                None => None,
            },
        };
        if value.is_some() {
            m.current_value = value;
        }
    }

    updated
}
