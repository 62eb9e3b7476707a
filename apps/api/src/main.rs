mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod scoring;
mod state;
mod suggestions;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::stopwords::StopwordSet;
use crate::scoring::FitScorer;
use crate::state::AppState;
use crate::suggestions::SuggestionRelay;

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

    info!("Starting resume-fit v{}", env!("CARGO_PKG_VERSION"));

    // Stopwords are loaded once and never mutated afterwards
    let stopwords = Arc::new(StopwordSet::english());
    anyhow::ensure!(!stopwords.is_empty(), "English stopword set is empty");
    info!("Loaded {} English stopwords", stopwords.len());

    let llm = LlmClient::new(
        &config.ollama_url,
        config.llm_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, endpoint: {}, timeout: {}s)",
        llm.model(),
        config.ollama_url,
        config.llm_timeout_secs
    );

    let state = AppState {
        config: config.clone(),
        scorer: FitScorer::new(stopwords),
        relay: SuggestionRelay::new(Arc::new(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
