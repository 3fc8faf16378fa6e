//! Hero selector
//!
//! Builds the rotating hero pool from the live feed and steps through it.
//!
//! The selector is a two-state machine:
//! - `Idle`: no pool loaded, ticks do nothing
//! - `Rotating`: pool loaded, each tick advances `(index + 1) mod len`
//!
//! The timer that produces ticks lives in [`super::page_session`]; this type
//! only owns the pool and the current index.

use chrono::{DateTime, Utc};

use super::classifier::classify;
use crate::domain::entities::{FeedItem, Section};
use crate::feed::{hero_node, Surface, Target};

/// Maximum hero items taken from each recognized section
pub const PER_SECTION: usize = 2;

/// Pool size when no recognized section has any items
pub const FALLBACK_COUNT: usize = 5;

/// Build the hero pool: up to two newest items per section, sections in
/// fixed order; falls back to the first five live items if that is empty.
pub fn build_hero_pool(live: &[FeedItem]) -> Vec<FeedItem> {
    let mut pool = Vec::new();

    for section in Section::ALL {
        let mut in_section: Vec<&FeedItem> =
            live.iter().filter(|item| item.in_section(section)).collect();
        // newest first; undated items sort last, stable otherwise
        in_section.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        pool.extend(in_section.into_iter().take(PER_SECTION).cloned());
    }

    if pool.is_empty() {
        pool = live.iter().take(FALLBACK_COUNT).cloned().collect();
    }

    pool
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum HeroState {
    #[default]
    Idle,
    Rotating {
        pool: Vec<FeedItem>,
        index: usize,
    },
}

#[derive(Debug, Default)]
pub struct HeroSelector {
    state: HeroState,
}

impl HeroSelector {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Rotating` with a fresh pool, starting from index 0
    pub fn start(&mut self, pool: Vec<FeedItem>) {
        tracing::debug!(pool_size = pool.len(), "Hero rotation started");
        self.state = HeroState::Rotating { pool, index: 0 };
    }

    #[cfg(test)]
    pub fn state(&self) -> &HeroState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_rotating(&self) -> bool {
        matches!(self.state, HeroState::Rotating { .. })
    }

    pub fn index(&self) -> usize {
        match &self.state {
            HeroState::Idle => 0,
            HeroState::Rotating { index, .. } => *index,
        }
    }

    pub fn pool(&self) -> &[FeedItem] {
        match &self.state {
            HeroState::Idle => &[],
            HeroState::Rotating { pool, .. } => pool,
        }
    }

    pub fn current(&self) -> Option<&FeedItem> {
        match &self.state {
            HeroState::Idle => None,
            HeroState::Rotating { pool, index } => pool.get(*index),
        }
    }

    /// Advance one step. A no-op while idle or with an empty pool.
    pub fn advance(&mut self) -> Option<&FeedItem> {
        match &mut self.state {
            HeroState::Rotating { pool, index } if !pool.is_empty() => {
                *index = (*index + 1) % pool.len();
                pool.get(*index)
            }
            _ => None,
        }
    }

    /// Render the current item into the hero container
    pub fn show<S: Surface>(&self, surface: &mut S, now: DateTime<Utc>) {
        surface.clear(Target::Hero);
        if let Some(item) = self.current() {
            surface.append(Target::Hero, hero_node(item, &classify(item, now)));
        }
    }

    /// One timer tick: fade out, advance and swap content, fade in.
    /// Returns false when there was nothing to rotate.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, now: DateTime<Utc>) -> bool {
        if self.pool().is_empty() {
            return false;
        }

        surface.fade(Target::Hero, false);
        self.advance();
        self.show(surface, now);
        surface.fade(Target::Hero, true);
        true
    }
}
