//! The weighted average shared by every level of the score roll-up.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Anything that contributes a score with a relative weight.
pub trait Weighted {
    fn weight(&self) -> f64;
    fn score(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightedScore {
    pub weight: f64,
    pub score: f64,
}

impl WeightedScore {
    pub fn new(weight: f64, score: f64) -> Self {
        Self { weight, score }
    }
}

impl Weighted for WeightedScore {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl Weighted for (f64, f64) {
    fn weight(&self) -> f64 {
        self.0
    }

    fn score(&self) -> f64 {
        self.1
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }

    fn score(&self) -> f64 {
        (**self).score()
    }
}

/// `Σ(wᵢ·sᵢ) / Σ(wᵢ)` over the entries present, or `0.0` when the weights
/// sum to zero.
///
/// Entries with a negative or non-finite weight, or a non-finite score, are
/// skipped, so the result always lies between the smallest and largest
/// accepted score.
pub fn weighted_average<I>(items: I) -> f64
where
    I: IntoIterator,
    I::Item: Weighted,
{
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for item in items {
        let (weight, score) = (item.weight(), item.score());
        if !weight.is_finite() || weight < 0.0 || !score.is_finite() {
            tracing::warn!(weight, score, "skipping invalid weighted entry");
            continue;
        }
        total_score += weight * score;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        total_score / total_weight
    } else {
        0.0
    }
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
