use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Categorical rating an evaluator assigns to an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Rating {
    Pass,
    HighPartial,
    Partial,
    LowPartial,
    Fail,
    /// The indicator does not apply and is left out of the weighted average.
    NotApplicable,
    /// Not yet rated. Counts with its weight at zero.
    NotRated,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Pass,
        Rating::HighPartial,
        Rating::Partial,
        Rating::LowPartial,
        Rating::Fail,
        Rating::NotApplicable,
        Rating::NotRated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Pass => "pass",
            Rating::HighPartial => "high-partial",
            Rating::Partial => "partial",
            Rating::LowPartial => "low-partial",
            Rating::Fail => "fail",
            Rating::NotApplicable => "not-applicable",
            Rating::NotRated => "not-rated",
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Rating::NotApplicable)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownRating(s.to_string()))
    }
}
