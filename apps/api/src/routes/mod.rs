pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/analyze/upload", post(handlers::handle_analyze_upload))
        .route("/ask-followup", post(handlers::handle_followup))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
