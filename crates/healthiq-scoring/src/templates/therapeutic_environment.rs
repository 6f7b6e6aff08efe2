use healthiq_core::models::criterion::CriterionKind;

use super::percent_indicators;
use crate::scoring::IndicatorSpec;
use crate::CriterionTemplate;

/// Therapeutic Environment audit criterion. Indicator weights are fractional
/// shares, as the backend stores them.
pub struct TherapeuticEnvironment;

impl CriterionTemplate for TherapeuticEnvironment {
    fn id(&self) -> &str {
        "therapeutic_environment"
    }

    fn criterion_id(&self) -> i64 {
        4
    }

    fn name(&self) -> &str {
        "Therapeutic Environment"
    }

    fn description(&self) -> &str {
        "Assessment of the healing environment"
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Audit
    }

    fn category(&self) -> &str {
        "Facility"
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn indicators(&self) -> &[IndicatorSpec] {
        static INDICATORS: std::sync::LazyLock<Vec<IndicatorSpec>> =
            std::sync::LazyLock::new(|| {
                percent_indicators(&[
                    (11, "Safety Measures", 0.3),
                    (12, "Comfort & Privacy", 0.3),
                    (13, "Therapeutic Activities", 0.4),
                ])
            });
        &INDICATORS
    }
}
