use healthiq_core::models::criterion::CriterionKind;

use super::percent_indicators;
use crate::scoring::IndicatorSpec;
use crate::CriterionTemplate;

/// Documentation Quality audit criterion.
pub struct DocumentationQuality;

impl CriterionTemplate for DocumentationQuality {
    fn id(&self) -> &str {
        "documentation_quality"
    }

    fn criterion_id(&self) -> i64 {
        5
    }

    fn name(&self) -> &str {
        "Documentation Quality"
    }

    fn description(&self) -> &str {
        "Evaluation of record-keeping standards"
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Audit
    }

    fn category(&self) -> &str {
        "Administrative"
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn indicators(&self) -> &[IndicatorSpec] {
        static INDICATORS: std::sync::LazyLock<Vec<IndicatorSpec>> =
            std::sync::LazyLock::new(|| {
                percent_indicators(&[
                    (14, "Completeness", 0.4),
                    (15, "Timeliness", 0.3),
                    (16, "Accuracy", 0.3),
                ])
            });
        &INDICATORS
    }
}
