use axum::Json;
use serde::{Deserialize, Serialize};

use healthiq_core::models::criterion::Criterion;
use healthiq_core::models::rating::Rating;
use healthiq_scoring::rating::{rating_from_score, rating_score};
use healthiq_scoring::rollup::{criterion_score, evaluate, Scorecard, SCORE_PRECISION};
use healthiq_scoring::weighted::{round_to, weighted_average, WeightedScore};

#[derive(Serialize)]
pub struct ScoreResponse {
    pub score: f64,
}

#[derive(Deserialize)]
pub struct RatingRequest {
    pub score: f64,
}

#[derive(Serialize)]
pub struct RatingResponse {
    pub rating: Rating,
}

#[derive(Serialize)]
pub struct RatingScale {
    pub rating: Rating,
    /// `None` for ratings that are left out of aggregation.
    pub score: Option<f64>,
}

pub async fn score_criterion(Json(criterion): Json<Criterion>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: round_to(criterion_score(&criterion), SCORE_PRECISION),
    })
}

pub async fn score_overall(Json(criteria): Json<Vec<Criterion>>) -> Json<Scorecard> {
    Json(evaluate(&criteria))
}

pub async fn score_weighted(Json(items): Json<Vec<WeightedScore>>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: round_to(weighted_average(&items), SCORE_PRECISION),
    })
}

pub async fn list_ratings() -> Json<Vec<RatingScale>> {
    Json(
        Rating::ALL
            .iter()
            .map(|&rating| RatingScale {
                rating,
                score: rating_score(rating),
            })
            .collect(),
    )
}

pub async fn rating_for_score(Json(req): Json<RatingRequest>) -> Json<RatingResponse> {
    Json(RatingResponse {
        rating: rating_from_score(req.score),
    })
}
