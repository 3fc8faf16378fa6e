//! Raw feed file handler
//!
//! Serves files from the data directory so the page script and other clients
//! can fetch the same documents the server renders from.

use std::io::ErrorKind;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::AppState;

/// A bare file name; anything that could leave the data directory is rejected
pub(crate) fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.contains('/')
        && !name.contains('\\')
}

fn content_type(name: &str) -> &'static str {
    if name.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

/// GET /data/:file
pub async fn get_data_file(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    if !is_safe_name(&file) {
        return Err(AppError::BadRequest(format!("invalid file name '{}'", file)));
    }

    let path = state.config.data_dir.join(&file);
    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(file.clone()),
        _ => AppError::Internal(format!("reading {}: {}", path.display(), e)),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type(&file)),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    )
        .into_response())
}
