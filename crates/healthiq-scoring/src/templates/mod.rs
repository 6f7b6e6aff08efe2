pub mod documentation_quality;
pub mod facility_infrastructure;
pub mod staff_competency;
pub mod therapeutic_environment;
pub mod treatment_outcomes;

use crate::scoring::{IndicatorSpec, ScoreRange};

/// Percentage-scored indicators from `(id, name, weight)` rows.
fn percent_indicators(rows: &[(i64, &str, f64)]) -> Vec<IndicatorSpec> {
    rows.iter()
        .map(|&(id, name, weight)| IndicatorSpec {
            id,
            name: name.to_string(),
            weight,
            range: ScoreRange::PERCENT,
            description: None,
        })
        .collect()
}
