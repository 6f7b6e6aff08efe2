use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rating::Rating;

/// Whether a criterion is used for patient assessments or facility audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CriterionKind {
    #[serde(alias = "Assessment")]
    Assessment,
    #[serde(alias = "Audit")]
    Audit,
}

/// Smallest scored unit within a criterion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Indicator {
    pub id: i64,
    pub name: String,
    /// Relative share within the parent criterion. Sibling weights need not
    /// sum to any particular total.
    pub weight: f64,
    /// Numeric score on a 0–100 scale, used when no rating is present.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// A weighted group of indicators forming one evaluation dimension.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Relative share of this criterion within an assessment or audit.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(rename = "type", alias = "purpose")]
    pub kind: CriterionKind,
    #[serde(default)]
    pub standard: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub indicators: Vec<Indicator>,
}

fn default_weight() -> f64 {
    1.0
}
