//! Item classifier
//!
//! Derives presentation attributes (breaking flag, age label, labels) from a
//! raw feed item. Pure and deterministic for a given `now`.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::entities::{FeedItem, DEFAULT_CATEGORY, DEFAULT_TYPE};

/// Items younger than this are flagged as breaking
pub const BREAKING_WINDOW_MINUTES: i64 = 30;

/// Presentation attributes for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAttributes {
    pub is_breaking: bool,
    /// "Just now", "Nm ago", "Nh ago", "Nd ago", or empty without a timestamp
    pub age_label: String,
    pub type_label: String,
    pub category_label: String,
}

/// Classify an item relative to `now`
pub fn classify(item: &FeedItem, now: DateTime<Utc>) -> DisplayAttributes {
    let age = item.published_at.map(|published| now - published);

    DisplayAttributes {
        is_breaking: age
            .map(|a| a < Duration::minutes(BREAKING_WINDOW_MINUTES))
            .unwrap_or(false),
        age_label: age.map(age_label).unwrap_or_default(),
        type_label: item.kind.clone().unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        category_label: category_label(item).to_string(),
    }
}

/// Category, then section label, then "GENERAL"
pub fn category_label(item: &FeedItem) -> &str {
    item.category
        .as_deref()
        .or(item.section_label.as_deref())
        .unwrap_or(DEFAULT_CATEGORY)
}

fn age_label(age: Duration) -> String {
    let secs = age.num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 60 * 60 {
        format!("{}m ago", secs / 60)
    } else if secs < 24 * 60 * 60 {
        format!("{}h ago", secs / (60 * 60))
    } else {
        format!("{}d ago", secs / (24 * 60 * 60))
    }
}
