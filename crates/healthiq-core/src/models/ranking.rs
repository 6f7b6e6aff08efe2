use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A facility's score as input to ranking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityScore {
    pub facility_id: i64,
    pub facility_name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityRanking {
    pub facility_id: i64,
    pub facility_name: String,
    pub overall_rank: u32,
    pub total_facilities: u32,
    pub audit_score: f64,
    pub previous_rank: Option<u32>,
}

impl FacilityRanking {
    /// Places gained since the previous ranking. Positive means the
    /// facility moved up.
    pub fn movement(&self) -> Option<i64> {
        self.previous_rank
            .map(|prev| i64::from(prev) - i64::from(self.overall_rank))
    }
}
