//! In-memory document
//!
//! A [`Surface`] that keeps the current content of every container and logs
//! each mutation as a [`Patch`] so a live page can replay it.

use std::collections::HashMap;

use super::node::Node;
use super::surface::{Patch, Surface, Target};

/// Current state of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub children: Vec<Node>,
    pub text: Option<String>,
    pub visible: bool,
    pub active: bool,
    /// False while a fade transition is in progress
    pub shown: bool,
}

impl Region {
    fn for_target(target: Target) -> Self {
        Self {
            children: Vec::new(),
            text: None,
            // empty-state indicators start hidden
            visible: !matches!(target, Target::EmptyState(_)),
            active: false,
            shown: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct Document {
    regions: HashMap<Target, Region>,
    patches: Vec<Patch>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn region_mut(&mut self, target: Target) -> &mut Region {
        self.regions
            .entry(target)
            .or_insert_with(|| Region::for_target(target))
    }

    /// Snapshot of a container (default state if never touched)
    pub fn region(&self, target: Target) -> Region {
        self.regions
            .get(&target)
            .cloned()
            .unwrap_or_else(|| Region::for_target(target))
    }

    pub fn children(&self, target: Target) -> &[Node] {
        self.regions
            .get(&target)
            .map(|r| r.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn text(&self, target: Target) -> Option<&str> {
        self.regions.get(&target).and_then(|r| r.text.as_deref())
    }

    pub fn is_visible(&self, target: Target) -> bool {
        self.region(target).visible
    }

    pub fn is_active(&self, target: Target) -> bool {
        self.region(target).active
    }

    #[cfg(test)]
    pub fn is_shown(&self, target: Target) -> bool {
        self.region(target).shown
    }

    /// Patches recorded since the last drain
    #[cfg(test)]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn drain_patches(&mut self) -> Vec<Patch> {
        std::mem::take(&mut self.patches)
    }
}

impl Surface for Document {
    fn clear(&mut self, target: Target) {
        let region = self.region_mut(target);
        region.children.clear();
        region.text = None;
        self.patches.push(Patch::Clear { target });
    }

    fn append(&mut self, target: Target, node: Node) {
        let html = node.to_html();
        self.region_mut(target).children.push(node);
        self.patches.push(Patch::Append { target, html });
    }

    fn set_text(&mut self, target: Target, text: &str) {
        self.region_mut(target).text = Some(text.to_string());
        self.patches.push(Patch::Text {
            target,
            text: text.to_string(),
        });
    }

    fn set_visible(&mut self, target: Target, visible: bool) {
        self.region_mut(target).visible = visible;
        self.patches.push(Patch::Visible { target, visible });
    }

    fn set_active(&mut self, target: Target, active: bool) {
        self.region_mut(target).active = active;
        self.patches.push(Patch::Active { target, active });
    }

    fn fade(&mut self, target: Target, shown: bool) {
        self.region_mut(target).shown = shown;
        self.patches.push(Patch::Fade { target, shown });
    }
}
