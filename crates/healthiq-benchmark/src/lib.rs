//! healthiq-benchmark
//!
//! Benchmark comparison for facility metrics: status against a target,
//! percent difference, trend over a historical series, category roll-ups,
//! gap analysis, improvement planning, and facility rankings. Pure
//! computation over view models from `healthiq-core`.

pub mod catalog;
pub mod compare;
pub mod error;
pub mod facility;
pub mod gaps;
pub mod performance;
pub mod projection;
pub mod ranking;
pub mod stats;
pub mod trend;
