use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::status::ScheduleStatus;

pub const AUTO_MISSED_REASON: &str = "Automatically marked as missed - scheduled date passed";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Audit {
    pub id: Uuid,
    pub facility_id: i64,
    #[serde(default)]
    pub status: ScheduleStatus,
    pub scheduled_date: jiff::Timestamp,
    #[serde(default)]
    pub audit_date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub criteria_scores: Vec<AuditCriterionScore>,
    #[serde(default)]
    pub missed_reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Score recorded against one criterion during an audit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditCriterionScore {
    pub criteria_name: String,
    pub score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Audit {
    pub fn is_upcoming(&self, now: jiff::Timestamp) -> bool {
        self.status == ScheduleStatus::Scheduled && self.scheduled_date > now
    }

    pub fn is_overdue(&self, now: jiff::Timestamp) -> bool {
        self.status == ScheduleStatus::Scheduled && now > self.scheduled_date
    }

    /// Move an overdue scheduled audit to `Missed`. Returns whether the
    /// status changed.
    pub fn reconcile_overdue(&mut self, now: jiff::Timestamp) -> bool {
        if !self.is_overdue(now) {
            return false;
        }
        self.status = ScheduleStatus::Missed;
        self.missed_reason = Some(AUTO_MISSED_REASON.to_string());
        true
    }
}
