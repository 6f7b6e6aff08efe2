use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use healthiq_core::models::criterion::{Criterion, CriterionKind};
use healthiq_core::models::rating::Rating;
use healthiq_scoring::error::ScoringError;
use healthiq_scoring::rating::rating_from_score;
use healthiq_scoring::rollup::{criterion_score, SCORE_PRECISION};
use healthiq_scoring::scoring::{IndicatorEntry, IndicatorSpec};
use healthiq_scoring::weighted::round_to;
use healthiq_scoring::{all_templates, get_template, templates_of_kind, CriterionTemplate};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub kind: Option<CriterionKind>,
}

#[derive(Serialize)]
pub struct TemplateSummary {
    id: String,
    criterion_id: i64,
    name: String,
    kind: CriterionKind,
    category: String,
    weight: f64,
}

#[derive(Serialize)]
pub struct TemplateDetail {
    id: String,
    criterion_id: i64,
    name: String,
    description: String,
    kind: CriterionKind,
    category: String,
    weight: f64,
    indicators: Vec<IndicatorSpec>,
}

#[derive(Deserialize)]
pub struct ScoreTemplateRequest {
    pub entries: Vec<IndicatorEntry>,
}

#[derive(Serialize)]
pub struct ScoredCriterion {
    pub criterion: Criterion,
    pub score: f64,
    pub rating: Rating,
}

fn summary(t: &dyn CriterionTemplate) -> TemplateSummary {
    TemplateSummary {
        id: t.id().to_string(),
        criterion_id: t.criterion_id(),
        name: t.name().to_string(),
        kind: t.kind(),
        category: t.category().to_string(),
        weight: t.weight(),
    }
}

/// List built-in templates, optionally only those of one kind.
pub async fn list_templates(Query(query): Query<TemplateQuery>) -> Json<Vec<TemplateSummary>> {
    let templates = match query.kind {
        Some(kind) => templates_of_kind(kind),
        None => all_templates(),
    };
    Json(templates.iter().map(|t| summary(t.as_ref())).collect())
}

pub async fn get_template_detail(
    Path(id): Path<String>,
) -> Result<Json<TemplateDetail>, ApiError> {
    let template = get_template(&id).ok_or(ScoringError::UnknownTemplate(id))?;

    Ok(Json(TemplateDetail {
        id: template.id().to_string(),
        criterion_id: template.criterion_id(),
        name: template.name().to_string(),
        description: template.description().to_string(),
        kind: template.kind(),
        category: template.category().to_string(),
        weight: template.weight(),
        indicators: template.indicators().to_vec(),
    }))
}

/// Validate evaluator entries against a template and score the result.
pub async fn score_template(
    Path(id): Path<String>,
    Json(req): Json<ScoreTemplateRequest>,
) -> Result<Json<ScoredCriterion>, ApiError> {
    let template = get_template(&id).ok_or(ScoringError::UnknownTemplate(id))?;
    let criterion = template.build_criterion(&req.entries)?;
    let score = criterion_score(&criterion);

    tracing::debug!(template_id = template.id(), score, "scored template entries");

    Ok(Json(ScoredCriterion {
        criterion,
        score: round_to(score, SCORE_PRECISION),
        rating: rating_from_score(score),
    }))
}
