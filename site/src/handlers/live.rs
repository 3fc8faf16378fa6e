//! Live page handler
//!
//! # Endpoints
//!
//! - `GET /live` - WebSocket upgrade for a live homepage
//!
//! # Protocol
//!
//! After connecting, the client receives a JSON array of patches that
//! populates every region, with the latest grid on the tab given as
//! `?tab=` (default LATEST). Each hero rotation and each tab change is pushed
//! as another patch array. The client may send `{"tab":"SPORTS"}` to switch
//! the latest grid. When the feeds cannot be loaded the server sends
//! `{"error": ...}` and closes.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use chrono::Utc;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app::{PageEvent, PageSession};
use super::home::parse_tab;
use crate::domain::entities::Section;
use crate::error::AppError;
use crate::feed::{Document, Patch};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct TabRequest {
    tab: String,
}

#[derive(Serialize)]
struct LiveError {
    error: String,
}

/// Parse a client message. Unknown tabs and malformed messages yield `None`.
pub(crate) fn parse_tab_request(text: &str) -> Option<Section> {
    let request: TabRequest = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(_) => {
            debug!("Invalid message from client: {}", text);
            return None;
        }
    };

    match request.tab.parse() {
        Ok(section) => Some(section),
        Err(_) => {
            debug!("Ignoring unknown tab '{}'", request.tab);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LiveQuery {
    pub tab: Option<String>,
}

/// WebSocket upgrade handler: `GET /live`
///
/// `?tab=SECTION` opens the session on that tab, matching `GET /?tab=`.
pub async fn live_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<LiveQuery>,
) -> Result<Response, AppError> {
    let tab = parse_tab(query.tab.as_deref())?;
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, tab)))
}

async fn send_json<T: Serialize>(
    sender: &mut SplitSink<WebSocket, Message>,
    value: &T,
) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => sender.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            warn!("Failed to serialize live message: {}", e);
            true
        }
    }
}

async fn send_patches(sender: &mut SplitSink<WebSocket, Message>, patches: Vec<Patch>) -> bool {
    if patches.is_empty() {
        return true;
    }
    send_json(sender, &patches).await
}

/// Handle a WebSocket connection.
async fn handle_socket(socket: WebSocket, state: AppState, tab: Section) {
    debug!("Live client connected");

    let (mut sender, mut receiver) = socket.split();

    let now = Utc::now();
    let mut page = match state.page_service.open(Document::new(), now).await {
        Ok(page) => page,
        Err(e) => {
            let _ = send_json(&mut sender, &LiveError { error: e.to_string() }).await;
            let _ = sender.send(Message::Close(None)).await;
            return;
        }
    };

    if tab != page.state().tabs.active() {
        page.select_tab(tab, now);
    }

    let mut session = PageSession::new(page);
    let initial = session.page_mut().surface_mut().drain_patches();
    if !send_patches(&mut sender, initial).await {
        return;
    }
    session.start_rotation(state.config.hero_interval);

    // Forward client tab selections into the session
    let events = session.events();
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(section) = parse_tab_request(&text) {
                        if events.send(PageEvent::SelectTab(section)).is_err() {
                            return;
                        }
                    }
                }
                Ok(Message::Close(_)) => break,
                Err(e) => {
                    warn!("WebSocket error: {}", e);
                    break;
                }
                _ => {} // Ignore ping/pong/binary
            }
        }
        let _ = events.send(PageEvent::Close);
    });

    while let Some(event) = session.next_event().await {
        if !session.apply(event, Utc::now()) {
            break;
        }
        let patches = session.page_mut().surface_mut().drain_patches();
        if !send_patches(&mut sender, patches).await {
            break;
        }
    }

    recv_task.abort();
    debug!("Live client disconnected");
}
