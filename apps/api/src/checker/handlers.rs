//! Axum route handlers for the Check API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::LOAD_FAILURE_NOTICE;
use crate::checker::report::{run_check, CheckOutcome, NO_SELECTION_MESSAGE};
use crate::checker::selection::{sub_option_value, SelectionState, SymptomTag};
use crate::errors::AppError;
use crate::models::RiskProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Sub-option chosen per symptom key, e.g. `{"fever": "high_grade"}`.
    #[serde(default)]
    pub specifiers: BTreeMap<String, String>,
    /// Falls back to the configured default profile when absent.
    #[serde(default)]
    pub risk_factors: Option<RiskProfile>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub check_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub selected: Vec<SymptomTag>,
    pub specifiers: BTreeMap<String, String>,
    pub scorer_backend: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/check
///
/// Red-flag check, then score → rank → present. Rejects an empty selection.
pub async fn handle_check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    if request.symptoms.is_empty() {
        return Err(AppError::Validation(NO_SELECTION_MESSAGE.to_string()));
    }
    if state.catalog.is_empty() {
        return Err(AppError::CatalogUnavailable(LOAD_FAILURE_NOTICE.to_string()));
    }

    let mut selection = SelectionState::from_keys(request.symptoms);
    for (key, value) in request.specifiers {
        if !selection.specify(&key, sub_option_value(&value)) {
            debug!("Ignoring specifier for unselected symptom '{key}'");
        }
    }

    let profile = request
        .risk_factors
        .unwrap_or_else(|| state.config.default_risk_profile.clone());

    let outcome = run_check(&selection, &profile, &state.catalog, state.scorer.as_ref())?;

    let check_id = Uuid::new_v4();
    info!(
        "Check {check_id}: {} symptom(s) selected via {} scorer",
        selection.len(),
        state.scorer.backend()
    );

    Ok(Json(CheckResponse {
        check_id,
        checked_at: Utc::now(),
        selected: selection.tags(&state.catalog),
        specifiers: selection.specifiers().clone(),
        scorer_backend: state.scorer.backend().to_string(),
        outcome,
    }))
}
