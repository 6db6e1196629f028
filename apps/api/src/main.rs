mod catalog;
mod checker;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{load_catalog, source_for};
use crate::checker::WeightedScorer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting symcheck v{}", env!("CARGO_PKG_VERSION"));

    // Load both datasets once; failures degrade to empty collections
    let symptoms_source = source_for(&config.symptoms_source);
    let diseases_source = source_for(&config.diseases_source);
    let catalog = load_catalog(symptoms_source.as_ref(), diseases_source.as_ref()).await;

    let scorer = Arc::new(WeightedScorer);
    info!(
        "Default risk profile: {:?}",
        config.default_risk_profile.active().collect::<Vec<_>>()
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        config: config.clone(),
        scorer,
    };

    // The checklist page is served from its own origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
