use std::collections::HashMap;

use healthiq_core::models::ranking::{FacilityRanking, FacilityScore};

use crate::error::BenchmarkError;
use crate::facility::{facility_metrics, FacilityRecords};

/// Rank facilities by score, highest first. Ranks run 1..=n with no ties;
/// equal scores keep their input order. `previous` maps facility id to the
/// rank it held last time.
pub fn rank_facilities(
    scores: &[FacilityScore],
    previous: &HashMap<i64, u32>,
) -> Vec<FacilityRanking> {
    let mut ordered: Vec<&FacilityScore> = scores.iter().collect();
    ordered.sort_by(|a, b| b.score.total_cmp(&a.score));

    let total = ordered.len() as u32;
    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(s, rank)| FacilityRanking {
            facility_id: s.facility_id,
            facility_name: s.facility_name.clone(),
            overall_rank: rank,
            total_facilities: total,
            audit_score: s.score,
            previous_rank: previous.get(&s.facility_id).copied(),
        })
        .collect()
}

/// Score each facility by its recent audit average, then rank.
pub fn rank_from_records(
    facilities: &[FacilityRecords],
    previous: &HashMap<i64, u32>,
    as_of: jiff::Timestamp,
) -> Result<Vec<FacilityRanking>, BenchmarkError> {
    let scores = facilities
        .iter()
        .map(|f| {
            Ok(FacilityScore {
                facility_id: f.facility_id,
                facility_name: f.facility_name.clone(),
                score: facility_metrics(f, as_of)?.overall_score(),
            })
        })
        .collect::<Result<Vec<_>, BenchmarkError>>()?;
    Ok(rank_facilities(&scores, previous))
}
