use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::search::search;
use crate::errors::AppError;
use crate::models::{Disease, SymptomCategory};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SymptomQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SymptomListResponse {
    pub categories: Vec<SymptomCategory>,
    /// Present when the taxonomy could not be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// GET /api/v1/symptoms
///
/// Returns the taxonomy, optionally filtered by `q` against symptom labels.
pub async fn handle_list_symptoms(
    State(state): State<AppState>,
    Query(params): Query<SymptomQuery>,
) -> Json<SymptomListResponse> {
    let categories = search(&state.catalog, params.q.as_deref().unwrap_or_default());
    Json(SymptomListResponse {
        categories,
        notice: state.catalog.notice().map(str::to_string),
    })
}

/// GET /api/v1/diseases
pub async fn handle_list_diseases(State(state): State<AppState>) -> Json<Vec<Disease>> {
    Json(state.catalog.diseases().to_vec())
}

/// GET /api/v1/diseases/:name
pub async fn handle_get_disease(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Disease>, AppError> {
    state
        .catalog
        .disease(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Disease '{name}' not found")))
}
