use healthiq_core::models::criterion::CriterionKind;

use super::percent_indicators;
use crate::scoring::IndicatorSpec;
use crate::CriterionTemplate;

/// Treatment Outcomes. The heaviest assessment criterion; symptom reduction
/// counts for half of it.
pub struct TreatmentOutcomes;

impl CriterionTemplate for TreatmentOutcomes {
    fn id(&self) -> &str {
        "treatment_outcomes"
    }

    fn criterion_id(&self) -> i64 {
        3
    }

    fn name(&self) -> &str {
        "Treatment Outcomes"
    }

    fn description(&self) -> &str {
        "Effectiveness of mental health interventions provided"
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Assessment
    }

    fn category(&self) -> &str {
        "Clinical"
    }

    fn weight(&self) -> f64 {
        40.0
    }

    fn indicators(&self) -> &[IndicatorSpec] {
        static INDICATORS: std::sync::LazyLock<Vec<IndicatorSpec>> =
            std::sync::LazyLock::new(|| {
                percent_indicators(&[
                    (8, "Symptom Reduction", 50.0),
                    (9, "Functional Improvement", 30.0),
                    (10, "Readmission Rate", 20.0),
                ])
            });
        &INDICATORS
    }
}
