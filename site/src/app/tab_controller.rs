//! Tab controller
//!
//! Owns the active filter of the latest grid. Selecting a tab marks it as the
//! only active tab and re-renders the latest grid with the matching live
//! items, bracketed by a fade.

use chrono::{DateTime, Utc};

use super::grid_presenter::{filter_section, render_grid};
use crate::domain::entities::{FeedItem, Section};
use crate::feed::{GridKind, Surface, Target};

#[derive(Debug, Default)]
pub struct TabController {
    active: Section,
}

impl TabController {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Mark the active tab and clear every other one
    fn mark_tabs<S: Surface>(&self, surface: &mut S) {
        for section in Section::ALL {
            surface.set_active(Target::Tab(section), section == self.active);
        }
    }

    /// Render the latest grid for the current tab without any transition
    pub fn render_active<S: Surface>(
        &self,
        surface: &mut S,
        live: &[FeedItem],
        max_count: usize,
        now: DateTime<Utc>,
    ) -> usize {
        self.mark_tabs(surface);
        let filtered = filter_section(live, self.active);
        render_grid(surface, GridKind::Latest, &filtered, max_count, now)
    }

    /// Switch to `section`: fade out, swap the grid content, fade in
    pub fn select<S: Surface>(
        &mut self,
        section: Section,
        surface: &mut S,
        live: &[FeedItem],
        max_count: usize,
        now: DateTime<Utc>,
    ) -> usize {
        tracing::debug!(tab = %section, "Tab selected");
        self.active = section;

        let grid = Target::Grid(GridKind::Latest);
        surface.fade(grid, false);
        let shown = self.render_active(surface, live, max_count, now);
        surface.fade(grid, true);
        shown
    }
}
