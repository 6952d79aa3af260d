mod config;
mod errors;
mod gateway;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::CareerGateway;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MissionBridge API v{}", env!("CARGO_PKG_VERSION"));

    let backend = GeminiClient::new(config.api_key.clone(), config.gemini_base_url.clone())?;
    let gateway = CareerGateway::new(Arc::new(backend));
    if gateway.is_configured() {
        info!(
            "Generative client initialized (models: {}, {})",
            llm_client::FLASH_MODEL,
            llm_client::PRO_MODEL
        );
    } else {
        warn!("No API key configured; generative requests will fail as service unavailable");
    }

    let state = AppState::new(gateway);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
