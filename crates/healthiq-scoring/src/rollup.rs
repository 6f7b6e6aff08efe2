//! Indicator → criterion → overall score roll-up.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthiq_core::models::criterion::{Criterion, CriterionKind, Indicator};

use crate::rating::rating_score;
use crate::weighted::{round_to, weighted_average, WeightedScore};

/// Decimal places scorecard scores are presented with.
pub const SCORE_PRECISION: u32 = 1;

/// The 0–100 score an indicator contributes, or `None` when it is rated
/// not applicable. A rating takes precedence over the numeric score.
pub fn indicator_score(indicator: &Indicator) -> Option<f64> {
    match indicator.rating {
        Some(rating) => rating_score(rating),
        None => Some(indicator.score),
    }
}

fn applicable_indicators(indicators: &[Indicator]) -> impl Iterator<Item = WeightedScore> + '_ {
    indicators
        .iter()
        .filter_map(|i| indicator_score(i).map(|score| WeightedScore::new(i.weight, score)))
}

/// Weighted average of a criterion's indicator scores.
pub fn criterion_score(criterion: &Criterion) -> f64 {
    weighted_average(applicable_indicators(&criterion.indicators))
}

/// `None` when the criterion has indicators but every one of them is rated
/// not applicable, in which case the whole criterion drops out of the
/// overall score.
fn applicable_criterion_score(criterion: &Criterion) -> Option<f64> {
    let mut applicable = applicable_indicators(&criterion.indicators).peekable();
    if !criterion.indicators.is_empty() && applicable.peek().is_none() {
        return None;
    }
    Some(weighted_average(applicable))
}

/// Weighted average of criterion scores by criterion weight.
pub fn overall_score(criteria: &[Criterion]) -> f64 {
    weighted_average(criteria.iter().filter_map(|c| {
        applicable_criterion_score(c).map(|score| WeightedScore::new(c.weight, score))
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionScore {
    pub criterion_id: i64,
    pub name: String,
    pub kind: CriterionKind,
    pub weight: f64,
    pub score: f64,
    /// False when every indicator was rated not applicable.
    pub applicable: bool,
}

/// Per-criterion scores and the overall score of one assessment or audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scorecard {
    pub criteria: Vec<CriterionScore>,
    pub overall_score: f64,
}

/// Score every criterion and roll them up. Rounding happens only on the
/// way out; the overall score is computed from unrounded criterion scores.
pub fn evaluate(criteria: &[Criterion]) -> Scorecard {
    let scored: Vec<CriterionScore> = criteria
        .iter()
        .map(|c| {
            let score = applicable_criterion_score(c);
            CriterionScore {
                criterion_id: c.id,
                name: c.name.clone(),
                kind: c.kind,
                weight: c.weight,
                score: round_to(score.unwrap_or(0.0), SCORE_PRECISION),
                applicable: score.is_some(),
            }
        })
        .collect();

    let overall = overall_score(criteria);
    tracing::debug!(
        criteria = criteria.len(),
        overall_score = overall,
        "evaluated scorecard"
    );

    Scorecard {
        criteria: scored,
        overall_score: round_to(overall, SCORE_PRECISION),
    }
}
