//! REST endpoint path conventions.
//!
//! Pure string functions. These define the canonical paths of the backend
//! resources whose payloads the scoring and benchmarking crates consume.

use uuid::Uuid;

pub const CRITERIA: &str = "/api/criteria/";

pub const AUDITS: &str = "/api/audits/";

pub const ASSESSMENTS: &str = "/api/assessments/";

pub const AUDIT_STATISTICS: &str = "/api/reports/audit-statistics/";

pub fn criterion(id: i64) -> String {
    format!("{CRITERIA}{id}/")
}

pub fn audit(id: Uuid) -> String {
    format!("{AUDITS}{id}/")
}

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS}{id}/")
}

/// Audit statistics for a date window, optionally narrowed to one facility.
pub fn audit_statistics(
    start: jiff::civil::Date,
    end: jiff::civil::Date,
    facility_id: Option<i64>,
) -> String {
    let mut path = format!("{AUDIT_STATISTICS}?startDate={start}&endDate={end}");
    if let Some(id) = facility_id {
        path.push_str(&format!("&facilityId={id}"));
    }
    path
}
