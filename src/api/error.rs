//! API error type mapped to HTTP status codes.
//!
//! Bodies are always JSON: `{"error": "..."}`, plus `details` for 500s.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::SearchError;

pub const NOT_READY_MESSAGE: &str = "Service not ready. Dataset failed to load.";

#[derive(Debug)]
pub enum ApiError {
    /// Invalid request (400).
    BadRequest(String),
    /// Missing resource (404).
    NotFound(String),
    /// No search index loaded (503).
    ServiceUnavailable(String),
    /// Unexpected failure (500); the string goes into `details`.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, json!({ "error": msg }))
            }
            ApiError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            e @ SearchError::EmptyQuery => ApiError::BadRequest(e.to_string()),
            e if e.is_not_ready() => ApiError::ServiceUnavailable(NOT_READY_MESSAGE.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

/// Converts a handler panic into the same JSON 500 as [`ApiError::Internal`].
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {details}");
    ApiError::Internal(details).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_mapping() {
        assert!(matches!(
            ApiError::from(SearchError::EmptyQuery),
            ApiError::BadRequest(m) if m == "Empty message"
        ));
        assert!(matches!(
            ApiError::from(SearchError::NotReady),
            ApiError::ServiceUnavailable(m) if m == NOT_READY_MESSAGE
        ));
        assert!(matches!(
            ApiError::from(SearchError::Embedding("timeout".into())),
            ApiError::Internal(m) if m.contains("timeout")
        ));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::ServiceUnavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_panic_response_is_json() {
        let response = panic_response(Box::new(format!("index {} out of range", 7)));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "index 7 out of range");

        let response = panic_response(Box::new(42u8));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["details"], "Unknown panic");
    }
}
