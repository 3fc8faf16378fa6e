//! Domain entities
//!
//! Pure domain models for feed content.

pub mod feed_item;
pub mod section;

pub use feed_item::{FeedDocument, FeedItem, DEFAULT_CATEGORY, DEFAULT_TYPE};
pub use section::Section;
