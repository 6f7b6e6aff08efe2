use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown criterion template: {0}")]
    UnknownTemplate(String),

    #[error("{} indicator score(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("unknown indicator {indicator_id} for template '{template_id}'")]
    UnknownIndicator {
        template_id: String,
        indicator_id: i64,
    },

    #[error("indicator {indicator_id} was scored more than once")]
    DuplicateEntry { indicator_id: i64 },
}
