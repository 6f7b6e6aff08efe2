use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::status::ScheduleStatus;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub patient_id: String,
    pub facility_id: i64,
    #[serde(default)]
    pub criteria_id: Option<i64>,
    #[serde(default)]
    pub status: ScheduleStatus,
    pub scheduled_date: jiff::Timestamp,
    #[serde(default)]
    pub assessment_date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub indicator_scores: Vec<IndicatorScore>,
    #[serde(default)]
    pub missed_reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Score recorded against a single indicator during an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorScore {
    pub indicator_id: i64,
    pub score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Assessment {
    pub fn is_upcoming(&self, now: jiff::Timestamp) -> bool {
        self.status == ScheduleStatus::Scheduled && self.scheduled_date > now
    }

    pub fn is_overdue(&self, now: jiff::Timestamp) -> bool {
        self.status == ScheduleStatus::Scheduled && self.scheduled_date < now
    }

    /// A scheduled assessment has not been performed yet, so it carries no
    /// completion date, criteria, or score.
    pub fn clear_if_scheduled(&mut self) {
        if self.status == ScheduleStatus::Scheduled {
            self.assessment_date = None;
            self.criteria_id = None;
            self.score = 0.0;
            self.indicator_scores.clear();
        }
    }

    pub fn mark_missed(&mut self, reason: Option<String>) {
        self.status = ScheduleStatus::Missed;
        if reason.is_some() {
            self.missed_reason = reason;
        }
    }
}
