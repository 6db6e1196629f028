pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::checker::handlers as checker;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/symptoms", get(catalog::handle_list_symptoms))
        .route("/api/v1/diseases", get(catalog::handle_list_diseases))
        .route("/api/v1/diseases/:name", get(catalog::handle_get_disease))
        .route("/api/v1/check", post(checker::handle_check))
        .with_state(state)
}
