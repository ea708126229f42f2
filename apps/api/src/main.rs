mod config;
mod errors;
mod explainer;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::TogetherClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ReferenceStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mizan API v{}", env!("CARGO_PKG_VERSION"));

    // Load reference data (bootstraps empty tables on first run)
    let store = Arc::new(ReferenceStore::load(&config.data_dir)?);
    info!(
        "Reference data loaded: {} standards, {} examples, {} glossary entries",
        store.standards().len(),
        store.examples().len(),
        store.glossary().len()
    );

    // Initialize completion client
    let llm = TogetherClient::new(config.together_api_key.clone(), config.together_model.clone());
    info!("Completion client initialized (model: {})", config.together_model);

    // Build app state
    let state = AppState {
        store,
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the frontend is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
