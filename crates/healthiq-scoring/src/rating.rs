//! Mapping between categorical ratings and numeric scores.

use healthiq_core::models::rating::Rating;

/// Contribution of a rating on a 0–1 scale.
///
/// `NotApplicable` has no value: the indicator is dropped from the
/// weighted average together with its weight. `NotRated` counts as zero.
pub fn rating_value(rating: Rating) -> Option<f64> {
    match rating {
        Rating::Pass => Some(1.0),
        Rating::HighPartial => Some(0.75),
        Rating::Partial => Some(0.5),
        Rating::LowPartial => Some(0.25),
        Rating::Fail => Some(0.0),
        Rating::NotApplicable => None,
        Rating::NotRated => Some(0.0),
    }
}

/// Same as [`rating_value`] on the 0–100 score scale.
pub fn rating_score(rating: Rating) -> Option<f64> {
    rating_value(rating).map(|v| v * 100.0)
}

/// Band a 0–100 score back into a rating.
pub fn rating_from_score(score: f64) -> Rating {
    if score >= 80.0 {
        Rating::Pass
    } else if score >= 65.0 {
        Rating::HighPartial
    } else if score >= 40.0 {
        Rating::Partial
    } else if score >= 20.0 {
        Rating::LowPartial
    } else {
        Rating::Fail
    }
}
