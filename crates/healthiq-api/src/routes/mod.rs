pub mod audits;
pub mod benchmarks;
pub mod facilities;
pub mod health;
pub mod scores;
pub mod templates;
