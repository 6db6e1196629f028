use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checker::DiseaseScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub config: Config,
    /// Pluggable scorer. Default: WeightedScorer.
    pub scorer: Arc<dyn DiseaseScorer>,
}
