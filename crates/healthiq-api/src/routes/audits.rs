use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use healthiq_core::models::audit::Audit;
use healthiq_core::response::ListResponse;

#[derive(Deserialize)]
pub struct ReconcileQuery {
    /// Defaults to now.
    pub now: Option<jiff::Timestamp>,
}

#[derive(Serialize)]
pub struct ReconcileResponse {
    pub updated: usize,
    pub audits: Vec<Audit>,
}

/// Mark every audit still scheduled past its date as missed. Accepts a plain
/// list or a paginated page.
pub async fn reconcile(
    Query(query): Query<ReconcileQuery>,
    Json(list): Json<ListResponse<Audit>>,
) -> Json<ReconcileResponse> {
    let now = query.now.unwrap_or_else(jiff::Timestamp::now);
    let mut audits = list.into_items();
    let updated = audits
        .iter_mut()
        .map(|a| a.reconcile_overdue(now))
        .filter(|&changed| changed)
        .count();
    if updated > 0 {
        tracing::info!(updated, "marked overdue audits as missed");
    }
    Json(ReconcileResponse { updated, audits })
}
