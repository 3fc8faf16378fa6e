//! Feed source port trait
//!
//! Defines the interface for loading a feed document into items.

use async_trait::async_trait;

use crate::domain::entities::FeedItem;
use crate::error::FeedError;

/// Loads the items of one feed document.
///
/// Implementations must not cache between calls: every `load` reflects the
/// current content at `location`. There is no retry; a failure is returned
/// as-is.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Load the feed at `location` (a URL or a local path)
    async fn load(&self, location: &str) -> Result<Vec<FeedItem>, FeedError>;
}
