//! healthiq-core
//!
//! Pure domain types, REST endpoint conventions, and list-response
//! normalization. No HTTP dependency; this is the shared vocabulary of the
//! HealthIQ scoring and benchmarking crates.

pub mod endpoints;
pub mod error;
pub mod models;
pub mod response;
