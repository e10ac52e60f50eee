mod config;
mod consolation;
mod errors;
mod llm_client;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionService, GeminiClient};
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

    info!("Starting Consuelo API v{}", env!("CARGO_PKG_VERSION"));

    // Missing credential is not fatal: requests report a config error instead.
    let completion: Option<Arc<dyn CompletionService>> = match GeminiClient::from_config(&config) {
        Ok(client) => {
            info!("Completion client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!("Completion client unavailable, set GEMINI_API_KEY to enable it: {e}");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        completion,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed front-end

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
