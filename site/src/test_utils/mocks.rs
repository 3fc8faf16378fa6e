//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and let tests verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::FeedItem;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

// ============================================================================
// In-Memory Feed Source
// ============================================================================

/// Feed source keyed by location. Unknown locations behave like a 404.
#[derive(Default)]
pub struct InMemoryFeedSource {
    feeds: RwLock<HashMap<String, Vec<FeedItem>>>,
    failing: RwLock<HashSet<String>>,
    loads: AtomicUsize,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a feed for testing
    pub fn with_feed(self, location: &str, items: Vec<FeedItem>) -> Self {
        self.set_feed(location, items);
        self
    }

    /// Make every load of `location` fail with a 503
    pub fn failing(self, location: &str) -> Self {
        self.failing.write().unwrap().insert(location.to_string());
        self
    }

    /// Replace a feed between loads
    pub fn set_feed(&self, location: &str, items: Vec<FeedItem>) {
        self.feeds
            .write()
            .unwrap()
            .insert(location.to_string(), items);
    }

    /// Number of loads attempted so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn load(&self, location: &str) -> Result<Vec<FeedItem>, FeedError> {
        self.loads.fetch_add(1, Ordering::SeqCst);

        if self.failing.read().unwrap().contains(location) {
            return Err(FeedError::Status {
                location: location.to_string(),
                status: 503,
            });
        }

        self.feeds
            .read()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| FeedError::Status {
                location: location.to_string(),
                status: 404,
            })
    }
}
