use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::{ApiError, NOT_READY_MESSAGE};
use crate::error::SearchError;
use crate::models::{ChatRequest, ChatResponse};
use crate::search::format::format_results;
use crate::state::AppState;

/// POST /api/chat - Rank verses against the message and render the top matches.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let message = req.message.trim();
    if message.is_empty() {
        return Err(SearchError::EmptyQuery.into());
    }

    let index = state
        .ensure_ready()
        .await
        .ok_or_else(|| ApiError::ServiceUnavailable(NOT_READY_MESSAGE.to_string()))?;

    let results = index.search(message).await.map_err(|e| {
        tracing::warn!("Error in chat endpoint: {e}");
        ApiError::from(e)
    })?;
    let formatted = format_results(&results);

    Ok(Json(ChatResponse {
        reply: formatted.reply,
        verses: formatted.verses,
        confidence_score: formatted.confidence_score,
    }))
}
