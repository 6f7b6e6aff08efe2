use healthiq_core::models::criterion::CriterionKind;

use super::percent_indicators;
use crate::scoring::IndicatorSpec;
use crate::CriterionTemplate;

/// Facility Infrastructure: physical structure and resources.
/// Building condition carries the largest share.
pub struct FacilityInfrastructure;

impl CriterionTemplate for FacilityInfrastructure {
    fn id(&self) -> &str {
        "facility_infrastructure"
    }

    fn criterion_id(&self) -> i64 {
        1
    }

    fn name(&self) -> &str {
        "Facility Infrastructure"
    }

    fn description(&self) -> &str {
        "Physical structure and resources available at the facility"
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Assessment
    }

    fn category(&self) -> &str {
        "Facility"
    }

    fn weight(&self) -> f64 {
        25.0
    }

    fn indicators(&self) -> &[IndicatorSpec] {
        static INDICATORS: std::sync::LazyLock<Vec<IndicatorSpec>> =
            std::sync::LazyLock::new(|| {
                percent_indicators(&[
                    (1, "Building Condition", 40.0),
                    (2, "Equipment Availability", 30.0),
                    (3, "Medication Supply", 30.0),
                ])
            });
        &INDICATORS
    }
}
