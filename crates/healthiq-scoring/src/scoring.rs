use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use healthiq_core::models::rating::Rating;

/// Defines the valid range for an indicator score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whole-number percentages, the scale every evaluation form uses.
    pub const PERCENT: ScoreRange = ScoreRange {
        min: 0.0,
        max: 100.0,
        step: Some(1.0),
    };

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// An indicator definition within a criterion template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorSpec {
    pub id: i64,
    pub name: String,
    pub weight: f64,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A score or rating provided by an evaluator for one indicator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorEntry {
    pub indicator_id: i64,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub indicator_id: i64,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
