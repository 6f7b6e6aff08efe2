use healthiq_core::models::criterion::CriterionKind;

use super::percent_indicators;
use crate::scoring::IndicatorSpec;
use crate::CriterionTemplate;

/// Staff Competency: four equally weighted indicators.
pub struct StaffCompetency;

impl CriterionTemplate for StaffCompetency {
    fn id(&self) -> &str {
        "staff_competency"
    }

    fn criterion_id(&self) -> i64 {
        2
    }

    fn name(&self) -> &str {
        "Staff Competency"
    }

    fn description(&self) -> &str {
        "Skills and qualifications of the mental health professionals"
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Assessment
    }

    fn category(&self) -> &str {
        "Administrative"
    }

    fn weight(&self) -> f64 {
        35.0
    }

    fn indicators(&self) -> &[IndicatorSpec] {
        static INDICATORS: std::sync::LazyLock<Vec<IndicatorSpec>> =
            std::sync::LazyLock::new(|| {
                percent_indicators(&[
                    (4, "Education Level", 25.0),
                    (5, "Years of Experience", 25.0),
                    (6, "Continued Education", 25.0),
                    (7, "Patient Feedback", 25.0),
                ])
            });
        &INDICATORS
    }
}
