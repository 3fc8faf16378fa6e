//! Homepage handler
//!
//! Renders a freshly populated homepage.
//! Supports content negotiation: Accept: application/json for a snapshot, otherwise HTML.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::entities::Section;
use crate::error::AppError;
use crate::feed::{render_page, Document};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub tab: Option<String>,
}

/// Parse an optional `?tab=` value; absent means the default tab
pub(crate) fn parse_tab(tab: Option<&str>) -> Result<Section, AppError> {
    match tab {
        None | Some("") => Ok(Section::default()),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("unknown tab '{}'", raw))),
    }
}

/// GET /
///
/// Loads both feeds and renders every region.
/// - `?tab=SPORTS` → latest grid filtered to that section
/// - Accept: application/json → JSON snapshot of the selection
/// - Otherwise → HTML page that upgrades to /live for rotation and tabs
pub async fn get_home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let tab = parse_tab(query.tab.as_deref())?;
    let now = Utc::now();

    let mut page = state.page_service.open(Document::new(), now).await?;
    if tab != page.state().tabs.active() {
        page.select_tab(tab, now);
    }

    let no_store = [(header::CACHE_CONTROL, "no-store")];
    if wants_json(&headers) {
        Ok((no_store, Json(page.snapshot())).into_response())
    } else {
        Ok((no_store, Html(render_page(page.surface()))).into_response())
    }
}
