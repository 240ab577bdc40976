//! HTTP layer built on axum.

/// Frontend file serving.
pub mod assets;
/// Verse retrieval endpoint.
pub mod chat;
/// API error type mapped to HTTP status codes.
pub mod error;
/// Health and corpus-size endpoints.
pub mod health;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/verses/count", get(health::verse_count))
        .route("/api/chat", post(chat::chat))
        .route("/", get(assets::index))
        .fallback(get(assets::file))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
