//! Feed client implementation

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use crate::domain::entities::{FeedDocument, FeedItem};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Loads `{ "items": [...] }` documents from http(s) URLs or file paths.
/// Nothing is cached; every load goes back to the source.
pub struct FeedClientImpl {
    http: Client,
}

impl Default for FeedClientImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClientImpl {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    fn is_remote(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    /// Append a `_ts` query parameter so intermediaries cannot serve a stale copy
    fn cache_busted(location: &str) -> String {
        let separator = if location.contains('?') { '&' } else { '?' };
        format!(
            "{}{}_ts={}",
            location,
            separator,
            Utc::now().timestamp_millis()
        )
    }

    async fn fetch(&self, location: &str) -> Result<String, FeedError> {
        let response = self
            .http
            .get(Self::cache_busted(location))
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|source| FeedError::Request {
                location: location.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FeedError::Request {
            location: location.to_string(),
            source,
        })
    }

    async fn read(&self, location: &str) -> Result<String, FeedError> {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|source| FeedError::Read {
                location: location.to_string(),
                source,
            })
    }
}

/// Parse a feed document body into its items
pub fn parse_feed(location: &str, body: &str) -> Result<Vec<FeedItem>, FeedError> {
    let document: FeedDocument = serde_json::from_str(body).map_err(|e| FeedError::Parse {
        location: location.to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        location,
        generated_at = document.generated_at.as_deref().unwrap_or("unknown"),
        items = document.items.len(),
        "Feed parsed"
    );

    Ok(document.items)
}

#[async_trait]
impl FeedSource for FeedClientImpl {
    async fn load(&self, location: &str) -> Result<Vec<FeedItem>, FeedError> {
        let body = if Self::is_remote(location) {
            self.fetch(location).await?
        } else {
            self.read(location).await?
        };

        parse_feed(location, &body)
    }
}
