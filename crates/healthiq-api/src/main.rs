use tracing_subscriber::EnvFilter;

use healthiq_api::config::{load_catalog, ServerConfig};
use healthiq_api::router;
use healthiq_api::state::AppState;
use healthiq_benchmark::catalog::default_categories;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => {
            tracing::info!("no catalog file configured, using built-in benchmarks");
            default_categories()
        }
    };

    let app = router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
