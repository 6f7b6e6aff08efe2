//! healthiq-scoring
//!
//! Weighted scoring for assessments and audits. Pure computation, no I/O.
//! Maps ratings to scores, rolls indicator scores up into criterion and
//! overall scores, and defines the built-in criterion templates used to
//! validate evaluator input.

pub mod error;
pub mod rating;
pub mod rollup;
pub mod scoring;
pub mod templates;
pub mod weighted;

use std::collections::HashSet;

use healthiq_core::models::criterion::{Criterion, CriterionKind, Indicator};
use healthiq_core::models::rating::Rating;

use error::ScoringError;
use scoring::{IndicatorEntry, IndicatorSpec, ValidationError};

/// Trait implemented by each built-in criterion template.
pub trait CriterionTemplate: Send + Sync {
    /// Unique identifier for this template (e.g., "treatment_outcomes").
    fn id(&self) -> &str;

    /// Identifier of the criterion this template produces.
    fn criterion_id(&self) -> i64;

    /// Human-readable name (e.g., "Treatment Outcomes").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn kind(&self) -> CriterionKind;

    /// Backend category (Clinical, Facility, Administrative, ...).
    fn category(&self) -> &str;

    /// Share of this criterion in the overall score.
    fn weight(&self) -> f64;

    /// The indicators this criterion is scored on.
    fn indicators(&self) -> &[IndicatorSpec];

    /// Check every numeric score against its indicator's range.
    fn validate_entries(&self, entries: &[IndicatorEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in entries {
            let (Some(spec), Some(value)) = (
                self.indicators().iter().find(|s| s.id == entry.indicator_id),
                entry.score,
            ) else {
                continue;
            };
            if !spec.range.contains(value) {
                errors.push(ValidationError {
                    indicator_id: entry.indicator_id,
                    value,
                    expected_range: spec.range,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        spec.name,
                        value,
                        spec.range.min,
                        spec.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Build a scored criterion from evaluator entries. Indicators without
    /// an entry are marked not rated.
    fn build_criterion(&self, entries: &[IndicatorEntry]) -> Result<Criterion, ScoringError> {
        let mut seen = HashSet::new();
        for entry in entries {
            if !self.indicators().iter().any(|s| s.id == entry.indicator_id) {
                return Err(ScoringError::UnknownIndicator {
                    template_id: self.id().to_string(),
                    indicator_id: entry.indicator_id,
                });
            }
            if !seen.insert(entry.indicator_id) {
                return Err(ScoringError::DuplicateEntry {
                    indicator_id: entry.indicator_id,
                });
            }
        }

        let errors = self.validate_entries(entries);
        if !errors.is_empty() {
            return Err(ScoringError::Validation(errors));
        }

        let indicators = self
            .indicators()
            .iter()
            .map(|spec| {
                let entry = entries.iter().find(|e| e.indicator_id == spec.id);
                let rating = match entry {
                    Some(e) if e.rating.is_some() => e.rating,
                    Some(e) if e.score.is_some() => None,
                    _ => Some(Rating::NotRated),
                };
                Indicator {
                    id: spec.id,
                    name: spec.name.clone(),
                    weight: spec.weight,
                    score: entry.and_then(|e| e.score).unwrap_or(0.0),
                    rating,
                }
            })
            .collect();

        Ok(Criterion {
            id: self.criterion_id(),
            name: self.name().to_string(),
            description: Some(self.description().to_string()),
            weight: self.weight(),
            kind: self.kind(),
            standard: None,
            category: Some(self.category().to_string()),
            indicators,
        })
    }
}

/// Return all built-in criterion templates.
pub fn all_templates() -> Vec<Box<dyn CriterionTemplate>> {
    vec![
        Box::new(templates::facility_infrastructure::FacilityInfrastructure),
        Box::new(templates::staff_competency::StaffCompetency),
        Box::new(templates::treatment_outcomes::TreatmentOutcomes),
        Box::new(templates::therapeutic_environment::TherapeuticEnvironment),
        Box::new(templates::documentation_quality::DocumentationQuality),
    ]
}

/// Look up a template by ID.
pub fn get_template(id: &str) -> Option<Box<dyn CriterionTemplate>> {
    all_templates().into_iter().find(|t| t.id() == id)
}

/// Templates of one kind, in registration order.
pub fn templates_of_kind(kind: CriterionKind) -> Vec<Box<dyn CriterionTemplate>> {
    all_templates()
        .into_iter()
        .filter(|t| t.kind() == kind)
        .collect()
}
