use std::collections::HashMap;

use axum::Json;
use serde::Deserialize;

use healthiq_benchmark::facility::{compare_facilities, FacilityComparison, FacilityRecords};
use healthiq_benchmark::ranking::{rank_facilities, rank_from_records};
use healthiq_core::models::ranking::{FacilityRanking, FacilityScore};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CompareFacilitiesRequest {
    pub facility_a: FacilityRecords,
    pub facility_b: FacilityRecords,
    /// Defaults to now.
    #[serde(default)]
    pub as_of: Option<jiff::Timestamp>,
}

/// Rank precomputed scores, or score facilities from their records first.
#[derive(Deserialize)]
pub struct RankingRequest {
    #[serde(default)]
    pub scores: Vec<FacilityScore>,
    #[serde(default)]
    pub facilities: Vec<FacilityRecords>,
    /// Facility id to the rank it held last time.
    #[serde(default)]
    pub previous: HashMap<i64, u32>,
    #[serde(default)]
    pub as_of: Option<jiff::Timestamp>,
}

pub async fn compare(
    Json(req): Json<CompareFacilitiesRequest>,
) -> Result<Json<FacilityComparison>, ApiError> {
    if req.facility_a.facility_id == req.facility_b.facility_id {
        return Err(ApiError::BadRequest(
            "cannot compare a facility with itself".to_string(),
        ));
    }
    let as_of = req.as_of.unwrap_or_else(jiff::Timestamp::now);
    Ok(Json(compare_facilities(&req.facility_a, &req.facility_b, as_of)?))
}

pub async fn rankings(
    Json(req): Json<RankingRequest>,
) -> Result<Json<Vec<FacilityRanking>>, ApiError> {
    if !req.scores.is_empty() && !req.facilities.is_empty() {
        return Err(ApiError::BadRequest(
            "provide either scores or facilities, not both".to_string(),
        ));
    }
    let rankings = if req.facilities.is_empty() {
        rank_facilities(&req.scores, &req.previous)
    } else {
        let as_of = req.as_of.unwrap_or_else(jiff::Timestamp::now);
        rank_from_records(&req.facilities, &req.previous, as_of)?
    };
    Ok(Json(rankings))
}
