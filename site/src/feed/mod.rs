//! Feed module
//!
//! Presentational rendering of feed content: node trees, the render surface
//! and the full-page HTML renderer.

pub mod document;
pub mod node;
pub mod renderer;
pub mod surface;

pub use document::Document;
pub use node::{Element, Node};
pub use renderer::{card_node, hero_node, render_page, ticker_item_node};
pub use surface::{GridKind, Patch, Surface, Target};
