use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("benchmark target for '{metric_id}' must be non-zero and finite, got {target}")]
    InvalidTarget { metric_id: String, target: f64 },

    #[error("projection horizon of {days} days exceeds the maximum of {max}")]
    HorizonTooLong { days: u32, max: u32 },

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
