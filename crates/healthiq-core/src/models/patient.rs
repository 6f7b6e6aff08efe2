use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
    Discharged,
}

/// The subset of a patient record coverage metrics need.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: String,
    #[serde(default)]
    pub facility_id: Option<i64>,
    #[serde(default)]
    pub status: PatientStatus,
}
