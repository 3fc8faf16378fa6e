//! Application layer
//!
//! Content selection and presentation: classify items, pick and rotate the
//! hero, build the ticker, fill grids and drive the section tabs.

pub mod classifier;
pub mod grid_presenter;
pub mod hero_selector;
pub mod page_service;
pub mod page_session;
pub mod tab_controller;
pub mod ticker_builder;

#[allow(unused_imports)]
pub use classifier::{classify, DisplayAttributes};
#[allow(unused_imports)]
pub use hero_selector::{HeroSelector, HeroState};
#[allow(unused_imports)]
pub use page_service::{Feeds, GridSnapshot, Homepage, HomepageSnapshot, PageService, RenderState};
#[allow(unused_imports)]
pub use page_session::{PageEvent, PageSession, RotationTimer};
#[allow(unused_imports)]
pub use tab_controller::TabController;
