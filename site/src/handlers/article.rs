//! Article handler

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub id: Option<String>,
}

/// GET /api/article?id=
///
/// Returns one item from the current feeds, live first.
pub async fn get_article(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Result<Response, AppError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing id".to_string()))?;

    let item = state
        .page_service
        .find_article(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("article {}", id)))?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(item)).into_response())
}
