use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and what the catalog loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let status = if state.catalog.load_errors().is_empty() {
        "ok"
    } else {
        "degraded"
    };
    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "symcheck",
        "catalog": state.catalog.summary(),
    }))
}
