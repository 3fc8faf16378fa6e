//! Test fixtures
//!
//! Factory functions for creating feed items with sensible defaults.
//! Each fixture creates a valid item that tests can then customize.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::FeedItem;

/// Fixed "now" for every time-dependent test
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// Create a REAL item in `section`, published ten minutes ago (so breaking)
pub fn test_item(id: &str, section: &str) -> FeedItem {
    test_item_at(id, section, now() - Duration::minutes(10))
}

/// Create a REAL item in `section` published at `published_at`
pub fn test_item_at(id: &str, section: &str, published_at: DateTime<Utc>) -> FeedItem {
    FeedItem {
        dek: format!("Dek for {}", id),
        kind: Some("REAL".to_string()),
        category: Some(section.to_string()),
        section: Some(section.to_string()),
        author: Some("Desk".to_string()),
        published_at: Some(published_at),
        ..FeedItem::new(id, format!("Story {}", id))
    }
}

/// Three LATEST items of different ages plus one SPORTS item
pub fn scenario_live_feed() -> Vec<FeedItem> {
    vec![
        test_item_at("latest_new", "LATEST", now() - Duration::minutes(5)),
        test_item_at("latest_mid", "LATEST", now() - Duration::hours(1)),
        test_item_at("latest_old", "LATEST", now() - Duration::hours(3)),
        test_item_at("sports_1", "SPORTS", now() - Duration::hours(1)),
    ]
}
