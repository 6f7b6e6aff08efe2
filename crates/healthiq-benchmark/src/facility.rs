//! Per-facility metrics over recent audit and assessment activity.

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthiq_core::models::assessment::Assessment;
use healthiq_core::models::audit::Audit;
use healthiq_core::models::patient::{Patient, PatientStatus};
use healthiq_core::models::status::ScheduleStatus;

use crate::error::BenchmarkError;

pub const AUDIT_WINDOW_DAYS: i64 = 90;
pub const ASSESSMENT_WINDOW_DAYS: i64 = 30;

/// Everything known about one facility, as fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityRecords {
    pub facility_id: i64,
    pub facility_name: String,
    #[serde(default)]
    pub audits: Vec<Audit>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub patients: Vec<Patient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditScoreSummary {
    pub average: f64,
    pub count: u64,
    pub period_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientCoverage {
    pub total_patients: u64,
    pub assessed_patients: u64,
    pub coverage_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub count: u64,
    pub average_score: f64,
    pub period_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityMetrics {
    pub audit_scores: AuditScoreSummary,
    pub patient_coverage: PatientCoverage,
    pub recent_assessments: AssessmentSummary,
}

impl FacilityMetrics {
    /// The score a facility is ranked and compared by.
    pub fn overall_score(&self) -> f64 {
        self.audit_scores.average
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityComparison {
    pub facility_a: i64,
    pub facility_a_name: String,
    pub facility_b: i64,
    pub facility_b_name: String,
    pub comparison_date: jiff::Timestamp,
    pub overall_score_a: f64,
    pub overall_score_b: f64,
    pub facility_a_metrics: FacilityMetrics,
    pub facility_b_metrics: FacilityMetrics,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn window_start(as_of: jiff::Timestamp, days: i64) -> Result<jiff::Timestamp, BenchmarkError> {
    Ok(as_of.checked_sub(SignedDuration::from_hours(days * 24))?)
}

/// Metrics for one facility as of `as_of`. Records belonging to other
/// facilities are ignored.
pub fn facility_metrics(
    records: &FacilityRecords,
    as_of: jiff::Timestamp,
) -> Result<FacilityMetrics, BenchmarkError> {
    let audit_since = window_start(as_of, AUDIT_WINDOW_DAYS)?;
    let audit_scores: Vec<f64> = records
        .audits
        .iter()
        .filter(|a| a.facility_id == records.facility_id)
        .filter(|a| a.status == ScheduleStatus::Completed)
        .filter(|a| a.audit_date.is_some_and(|d| d >= audit_since))
        .map(|a| a.overall_score)
        .collect();

    let active: Vec<&Patient> = records
        .patients
        .iter()
        .filter(|p| p.facility_id == Some(records.facility_id))
        .filter(|p| p.status == PatientStatus::Active)
        .collect();
    let assessed = active
        .iter()
        .filter(|p| {
            records
                .assessments
                .iter()
                .any(|a| a.facility_id == records.facility_id && a.patient_id == p.id)
        })
        .count();
    let coverage_percentage = if active.is_empty() {
        0.0
    } else {
        (assessed as f64 / active.len() as f64 * 1000.0).round() / 10.0
    };

    let assessment_since = window_start(as_of, ASSESSMENT_WINDOW_DAYS)?;
    let assessment_scores: Vec<f64> = records
        .assessments
        .iter()
        .filter(|a| a.facility_id == records.facility_id)
        .filter(|a| a.status == ScheduleStatus::Completed)
        .filter(|a| a.assessment_date.is_some_and(|d| d >= assessment_since))
        .map(|a| a.score)
        .collect();

    Ok(FacilityMetrics {
        audit_scores: AuditScoreSummary {
            average: mean(&audit_scores),
            count: audit_scores.len() as u64,
            period_days: AUDIT_WINDOW_DAYS,
        },
        patient_coverage: PatientCoverage {
            total_patients: active.len() as u64,
            assessed_patients: assessed as u64,
            coverage_percentage,
        },
        recent_assessments: AssessmentSummary {
            count: assessment_scores.len() as u64,
            average_score: mean(&assessment_scores),
            period_days: ASSESSMENT_WINDOW_DAYS,
        },
    })
}

pub fn compare_facilities(
    a: &FacilityRecords,
    b: &FacilityRecords,
    as_of: jiff::Timestamp,
) -> Result<FacilityComparison, BenchmarkError> {
    let metrics_a = facility_metrics(a, as_of)?;
    let metrics_b = facility_metrics(b, as_of)?;

    tracing::info!(
        facility_a = a.facility_id,
        facility_b = b.facility_id,
        "compared facilities"
    );

    Ok(FacilityComparison {
        facility_a: a.facility_id,
        facility_a_name: a.facility_name.clone(),
        facility_b: b.facility_id,
        facility_b_name: b.facility_name.clone(),
        comparison_date: as_of,
        overall_score_a: metrics_a.overall_score(),
        overall_score_b: metrics_b.overall_score(),
        facility_a_metrics: metrics_a,
        facility_b_metrics: metrics_b,
    })
}
