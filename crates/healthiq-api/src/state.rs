use std::sync::Arc;

use healthiq_core::models::benchmark::BenchmarkCategory;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    /// Benchmark targets. Read-only after startup.
    pub catalog: Arc<Vec<BenchmarkCategory>>,
}

impl AppState {
    pub fn new(catalog: Vec<BenchmarkCategory>) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
