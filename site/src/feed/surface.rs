//! Render surface
//!
//! The capability to write nodes, text and state flags into named containers.
//! Selection logic only talks to this trait; the in-memory
//! [`Document`](super::Document) is the concrete implementation.

use serde::Serialize;

use super::node::Node;
use crate::domain::entities::Section;

/// The grids on the homepage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Tab-controlled grid of live items
    Latest,
    /// Live items of type REAL
    Real,
    Sports,
    Meme,
    /// Archive feed
    Archive,
}

impl GridKind {
    pub const ALL: [GridKind; 5] = [
        GridKind::Latest,
        GridKind::Real,
        GridKind::Sports,
        GridKind::Meme,
        GridKind::Archive,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GridKind::Latest => "latest",
            GridKind::Real => "real",
            GridKind::Sports => "sports",
            GridKind::Meme => "meme",
            GridKind::Archive => "archive",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            GridKind::Latest => "Latest",
            GridKind::Real => "Real News",
            GridKind::Sports => "Sports",
            GridKind::Meme => "Not-So-Serious",
            GridKind::Archive => "Archive",
        }
    }
}

/// A named container on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Hero,
    TickerTrack,
    Grid(GridKind),
    /// Empty-state indicator belonging to a grid
    EmptyState(GridKind),
    Tab(Section),
    FooterYear,
}

impl Target {
    /// DOM id of the container
    pub fn element_id(&self) -> String {
        match self {
            Target::Hero => "hero".to_string(),
            Target::TickerTrack => "tickerTrack".to_string(),
            Target::Grid(grid) => format!("{}Grid", grid.key()),
            Target::EmptyState(grid) => format!("{}Empty", grid.key()),
            Target::Tab(section) => format!("tab-{}", section.as_str()),
            Target::FooterYear => "year".to_string(),
        }
    }
}

impl Serialize for Target {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.element_id())
    }
}

/// A rendering capability keyed by container
pub trait Surface {
    /// Remove all children and text from a container
    fn clear(&mut self, target: Target);

    fn append(&mut self, target: Target, node: Node);

    fn set_text(&mut self, target: Target, text: &str);

    fn set_visible(&mut self, target: Target, visible: bool);

    fn set_active(&mut self, target: Target, active: bool);

    /// Fade a container out (`shown = false`) or back in (`shown = true`)
    fn fade(&mut self, target: Target, shown: bool);
}

/// One recorded surface mutation, as pushed to a live page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Patch {
    Clear { target: Target },
    Append { target: Target, html: String },
    Text { target: Target, text: String },
    Visible { target: Target, visible: bool },
    Active { target: Target, active: bool },
    Fade { target: Target, shown: bool },
}
