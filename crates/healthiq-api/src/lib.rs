//! healthiq-api
//!
//! HTTP service over the scoring and benchmark crates. Every handler is a
//! pure computation on the request body plus the benchmark catalog held in
//! [`state::AppState`].

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Templates
        .route("/templates", get(routes::templates::list_templates))
        .route(
            "/templates/{id}",
            get(routes::templates::get_template_detail),
        )
        .route(
            "/templates/{id}/score",
            post(routes::templates::score_template),
        )
        // Scores and ratings
        .route("/scores/criterion", post(routes::scores::score_criterion))
        .route("/scores/overall", post(routes::scores::score_overall))
        .route("/scores/weighted", post(routes::scores::score_weighted))
        .route("/ratings", get(routes::scores::list_ratings))
        .route("/ratings/score", post(routes::scores::rating_for_score))
        // Benchmarks
        .route("/benchmarks/catalog", get(routes::benchmarks::get_catalog))
        .route("/benchmarks/compare", post(routes::benchmarks::compare))
        .route(
            "/benchmarks/performance",
            post(routes::benchmarks::performance),
        )
        .route("/benchmarks/gaps", post(routes::benchmarks::gaps))
        .route(
            "/benchmarks/projection",
            post(routes::benchmarks::projection),
        )
        // Facilities and audits
        .route("/facilities/compare", post(routes::facilities::compare))
        .route("/facilities/rankings", post(routes::facilities::rankings))
        .route("/audits/reconcile", post(routes::audits::reconcile))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
