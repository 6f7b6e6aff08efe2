use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use healthiq_benchmark::error::BenchmarkError;
use healthiq_scoring::error::ScoringError;
use healthiq_scoring::scoring::ValidationError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Indicator scores outside their ranges; each failure is returned.
    Validation(Vec<ValidationError>),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("{} indicator score(s) failed validation", errors.len()),
                errors,
            ),
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::UnknownTemplate(id) => {
                ApiError::NotFound(format!("template not found: {id}"))
            }
            ScoringError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

/// Every benchmark error stems from request input: a target, a horizon, or
/// a timestamp whose window falls outside the supported date range.
impl From<BenchmarkError> for ApiError {
    fn from(e: BenchmarkError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
