//! Shared state and router construction.
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::config::Config;
use crate::provider::{ImageProvider, RemixProvider};

/// Per-process state. Configuration is immutable after startup and the
/// providers hold no per-request state.
pub struct AppState {
    pub config: Arc<Config>,
    pub image_provider: Arc<dyn ImageProvider>,
    pub remix_provider: Arc<dyn RemixProvider>,
}

/// Build the full application router. `main` and the integration tests share
/// this so both run the same layers.
pub fn router(state: Arc<AppState>) -> Router {
    let remix_limit = DefaultBodyLimit::max(state.config.remix_max_bytes);
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/generate", post(handlers::generate))
        .route("/api/generate-video", post(handlers::generate_video))
        .route("/api/remix", post(handlers::remix).layer(remix_limit))
        .route("/api/characters", get(handlers::list_characters))
        .route("/api/characters/:id", get(handlers::get_character))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
