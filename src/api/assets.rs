//! Frontend files served from the configured public directory.

use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};

use crate::api::error::ApiError;
use crate::state::AppState;

/// GET / - The frontend entry page.
pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let path = state.config.public_dir.join("index.html");
    read_file(&path)
        .await
        .ok_or_else(|| ApiError::NotFound("Frontend not found".to_string()))
}

/// Any other GET path - a file under the public directory.
pub async fn file(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    let not_found = || ApiError::NotFound("File not found".to_string());
    let path = resolve(&state.config.public_dir, uri.path()).ok_or_else(not_found)?;
    read_file(&path).await.ok_or_else(not_found)
}

/// Join a request path onto `root`, refusing anything that could escape it.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (resolved.as_path() != root).then_some(resolved)
}

async fn read_file(path: &Path) -> Option<Response> {
    if !path.is_file() {
        return None;
    }
    match tokio::fs::read(path).await {
        Ok(bytes) => Some(([(header::CONTENT_TYPE, content_type(path))], bytes).into_response()),
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            None
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
