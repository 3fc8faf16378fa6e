//! Page session
//!
//! Drives a populated [`Homepage`] for the lifetime of one page: hero ticks
//! come from a [`RotationTimer`], tab selections from the client, and both
//! arrive on a single channel so they are applied one at a time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::page_service::Homepage;
use crate::domain::entities::Section;
use crate::feed::Surface;

/// Something that happens to a live page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    HeroTick,
    SelectTab(Section),
    Close,
}

/// Repeating hero tick task. At most one is running per timer; starting
/// again aborts the previous task first.
#[derive(Debug, Default)]
pub struct RotationTimer {
    handle: Option<JoinHandle<()>>,
}

impl RotationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `HeroTick` to `events` every `period`, first tick one period from now
    pub fn start(&mut self, period: Duration, events: mpsc::UnboundedSender<PageEvent>) {
        self.stop();

        if period.is_zero() {
            tracing::warn!("Hero rotation period is zero, rotation disabled");
            return;
        }

        self.handle = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if events.send(PageEvent::HeroTick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct PageSession<S: Surface> {
    page: Homepage<S>,
    timer: RotationTimer,
    events_tx: mpsc::UnboundedSender<PageEvent>,
    events_rx: mpsc::UnboundedReceiver<PageEvent>,
}

impl<S: Surface> PageSession<S> {
    pub fn new(page: Homepage<S>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            page,
            timer: RotationTimer::new(),
            events_tx,
            events_rx,
        }
    }

    /// Handle for feeding client events into the session
    pub fn events(&self) -> mpsc::UnboundedSender<PageEvent> {
        self.events_tx.clone()
    }

    /// (Re)start hero rotation, cancelling any running timer
    pub fn start_rotation(&mut self, period: Duration) {
        self.timer.start(period, self.events_tx.clone());
    }

    #[cfg(test)]
    pub fn is_rotating(&self) -> bool {
        self.timer.is_running()
    }

    /// Wait for the next event
    pub async fn next_event(&mut self) -> Option<PageEvent> {
        self.events_rx.recv().await
    }

    /// Apply one event. Returns false once the session should end.
    pub fn apply(&mut self, event: PageEvent, now: DateTime<Utc>) -> bool {
        match event {
            PageEvent::HeroTick => {
                self.page.rotate_hero(now);
                true
            }
            PageEvent::SelectTab(section) => {
                self.page.select_tab(section, now);
                true
            }
            PageEvent::Close => {
                self.timer.stop();
                false
            }
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &Homepage<S> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Homepage<S> {
        &mut self.page
    }
}
