//! Ticker builder
//!
//! The ticker track holds the first N live items twice in a row so a CSS
//! scroll can loop without a visible gap.

use chrono::{DateTime, Utc};

use super::classifier::classify;
use crate::domain::entities::FeedItem;
use crate::feed::{ticker_item_node, Surface, Target};

/// First `max_count` items in feed order, followed by the same items again
pub fn build_ticker(items: &[FeedItem], max_count: usize) -> Vec<&FeedItem> {
    let head = &items[..items.len().min(max_count)];
    head.iter().chain(head.iter()).collect()
}

/// Replace the ticker track contents. Rebuilding never appends to old output.
pub fn render_ticker<S: Surface>(
    surface: &mut S,
    items: &[FeedItem],
    max_count: usize,
    now: DateTime<Utc>,
) -> usize {
    surface.clear(Target::TickerTrack);

    let sequence = build_ticker(items, max_count);
    for item in &sequence {
        surface.append(Target::TickerTrack, ticker_item_node(item, &classify(item, now)));
    }
    sequence.len()
}
