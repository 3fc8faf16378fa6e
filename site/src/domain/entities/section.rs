//! Section domain entity
//!
//! Coarse content categories used for hero selection, grids and tabs.

use serde::{Deserialize, Serialize};

/// A recognized homepage section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    #[default]
    Latest,
    Sports,
    Meme,
}

impl Section {
    /// All recognized sections, in hero pool order
    pub const ALL: [Section; 3] = [Section::Latest, Section::Sports, Section::Meme];

    /// Section code as it appears in the feed
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Latest => "LATEST",
            Section::Sports => "SPORTS",
            Section::Meme => "MEME",
        }
    }

    /// Human-readable tab caption
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Latest => "Latest",
            Section::Sports => "Sports",
            Section::Meme => "Not-So-Serious",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LATEST" => Ok(Section::Latest),
            "SPORTS" => Ok(Section::Sports),
            "MEME" => Ok(Section::Meme),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}
