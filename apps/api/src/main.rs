mod advisor;
mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::Advisor;
use crate::config::{Config, MISSING_CREDENTIAL_WARNING};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model client, or fall back when no credential is set
    let advisor = Advisor::from_config(&config).context("Failed to build Gemini client")?;
    match advisor.model() {
        Some(model) => info!("Gemini client initialized (model: {model})"),
        None => warn!("{MISSING_CREDENTIAL_WARNING}"),
    }

    let state = AppState { advisor };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
