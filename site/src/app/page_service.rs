//! Page service
//!
//! Runs the homepage initialization sequence: load both feeds, build the hero
//! pool, populate hero, ticker and grids. Only a fully populated [`Homepage`]
//! accepts tab selections and hero ticks.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::grid_presenter::{filter_section, filter_type, render_grid};
use super::hero_selector::{build_hero_pool, HeroSelector};
use super::tab_controller::TabController;
use super::ticker_builder::{build_ticker, render_ticker};
use crate::config::Limits;
use crate::domain::entities::{FeedItem, Section, DEFAULT_TYPE};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;
use crate::feed::{GridKind, Surface, Target};

/// The two loaded item collections
#[derive(Debug, Clone, Default)]
pub struct Feeds {
    pub live: Vec<FeedItem>,
    pub archive: Vec<FeedItem>,
}

impl Feeds {
    /// Find an item by id, live feed first
    pub fn find(&self, id: &str) -> Option<&FeedItem> {
        self.live
            .iter()
            .chain(self.archive.iter())
            .find(|item| item.id == id)
    }
}

/// Everything a page load owns. Each component holds its own slice.
#[derive(Debug, Default)]
pub struct RenderState {
    pub hero: HeroSelector,
    pub tabs: TabController,
    pub feeds: Feeds,
}

/// A populated homepage bound to its render surface
pub struct Homepage<S: Surface> {
    state: RenderState,
    surface: S,
    limits: Limits,
}

/// JSON view of what a populated homepage shows
#[derive(Debug, Clone, Serialize)]
pub struct HomepageSnapshot {
    pub hero_pool: Vec<String>,
    pub hero_index: usize,
    pub active_tab: Section,
    pub ticker: Vec<String>,
    pub grids: Vec<GridSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot {
    pub grid: &'static str,
    pub items: Vec<String>,
    pub empty: bool,
}

fn grid_items(state: &RenderState, grid: GridKind) -> Vec<&FeedItem> {
    let feeds = &state.feeds;
    match grid {
        GridKind::Latest => filter_section(&feeds.live, state.tabs.active()),
        GridKind::Real => filter_type(&feeds.live, DEFAULT_TYPE),
        GridKind::Sports => filter_section(&feeds.live, Section::Sports),
        GridKind::Meme => filter_section(&feeds.live, Section::Meme),
        GridKind::Archive => feeds.archive.iter().collect(),
    }
}

fn ids<'a>(items: impl IntoIterator<Item = &'a FeedItem>) -> Vec<String> {
    items.into_iter().map(|i| i.id.clone()).collect()
}

impl<S: Surface> Homepage<S> {
    /// Populate every region from freshly loaded feeds and start the hero
    pub fn populate(feeds: Feeds, mut surface: S, limits: Limits, now: DateTime<Utc>) -> Self {
        let mut state = RenderState {
            feeds,
            ..RenderState::default()
        };

        surface.set_text(Target::FooterYear, &now.year().to_string());

        state.hero.start(build_hero_pool(&state.feeds.live));
        state.hero.show(&mut surface, now);

        render_ticker(&mut surface, &state.feeds.live, limits.ticker, now);

        state
            .tabs
            .render_active(&mut surface, &state.feeds.live, limits.latest, now);

        let mut page = Self {
            state,
            surface,
            limits,
        };
        for grid in [
            GridKind::Real,
            GridKind::Sports,
            GridKind::Meme,
            GridKind::Archive,
        ] {
            page.render_static_grid(grid, now);
        }
        page
    }

    fn grid_limit(&self, grid: GridKind) -> usize {
        match grid {
            GridKind::Latest => self.limits.latest,
            GridKind::Archive => self.limits.archive,
            _ => self.limits.section,
        }
    }

    /// Items feeding a grid, before the bound is applied
    pub fn grid_items(&self, grid: GridKind) -> Vec<&FeedItem> {
        grid_items(&self.state, grid)
    }

    fn render_static_grid(&mut self, grid: GridKind, now: DateTime<Utc>) {
        let limit = self.grid_limit(grid);
        let items = grid_items(&self.state, grid);
        let shown = render_grid(&mut self.surface, grid, &items, limit, now);
        tracing::debug!(grid = grid.key(), shown, "Grid rendered");
    }

    /// One hero rotation step
    pub fn rotate_hero(&mut self, now: DateTime<Utc>) -> bool {
        self.state.hero.tick(&mut self.surface, now)
    }

    /// Switch the latest grid to `section`
    pub fn select_tab(&mut self, section: Section, now: DateTime<Utc>) -> usize {
        self.state.tabs.select(
            section,
            &mut self.surface,
            &self.state.feeds.live,
            self.limits.latest,
            now,
        )
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn snapshot(&self) -> HomepageSnapshot {
        let grids = GridKind::ALL
            .iter()
            .map(|grid| {
                let items = self.grid_items(*grid);
                GridSnapshot {
                    grid: grid.key(),
                    empty: items.is_empty(),
                    items: ids(items.into_iter().take(self.grid_limit(*grid))),
                }
            })
            .collect();

        HomepageSnapshot {
            hero_pool: ids(self.state.hero.pool()),
            hero_index: self.state.hero.index(),
            active_tab: self.state.tabs.active(),
            ticker: ids(build_ticker(&self.state.feeds.live, self.limits.ticker)),
            grids,
        }
    }
}

/// Service for loading feeds and opening homepages
pub struct PageService {
    source: Arc<dyn FeedSource>,
    live_feed: String,
    archive_feed: String,
    limits: Limits,
}

impl PageService {
    pub fn new(
        source: Arc<dyn FeedSource>,
        live_feed: String,
        archive_feed: String,
        limits: Limits,
    ) -> Self {
        Self {
            source,
            live_feed,
            archive_feed,
            limits,
        }
    }

    /// Load both feeds; either failing fails the whole load
    pub async fn load_feeds(&self) -> Result<Feeds, FeedError> {
        let result = tokio::try_join!(
            self.source.load(&self.live_feed),
            self.source.load(&self.archive_feed),
        );

        match result {
            Ok((live, archive)) => {
                tracing::info!(
                    live = live.len(),
                    archive = archive.len(),
                    "Feeds loaded"
                );
                Ok(Feeds { live, archive })
            }
            Err(e) => {
                tracing::error!("Homepage initialization aborted: {}", e);
                Err(e)
            }
        }
    }

    /// Load fresh feeds and populate a homepage on `surface`
    pub async fn open<S: Surface>(
        &self,
        surface: S,
        now: DateTime<Utc>,
    ) -> Result<Homepage<S>, FeedError> {
        let feeds = self.load_feeds().await?;
        Ok(Homepage::populate(feeds, surface, self.limits, now))
    }

    /// Look an article up by id in the current feeds
    pub async fn find_article(&self, id: &str) -> Result<Option<FeedItem>, FeedError> {
        let feeds = self.load_feeds().await?;
        Ok(feeds.find(id).cloned())
    }
}
