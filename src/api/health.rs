use axum::extract::State;
use axum::Json;

use crate::config::SERVICE_NAME;
use crate::models::{HealthResponse, VerseCountResponse};
use crate::state::AppState;

/// GET /api/health - Liveness only; does not require the index.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/verses/count - Corpus size, initializing the index if needed.
/// Reports 0 when the dataset could not be loaded.
pub async fn verse_count(State(state): State<AppState>) -> Json<VerseCountResponse> {
    let total_verses = state.ensure_ready().await.map_or(0, |index| index.len());
    Json(VerseCountResponse { total_verses })
}
