//! Grid presenter
//!
//! Renders already-filtered items into a grid container and toggles the
//! grid's empty-state indicator. Filtering is the caller's job; helpers for
//! the common filters live here.

use chrono::{DateTime, Utc};

use super::classifier::classify;
use crate::domain::entities::{FeedItem, Section};
use crate::feed::{card_node, GridKind, Surface, Target};

/// Items whose section code matches `section`, in input order
pub fn filter_section(items: &[FeedItem], section: Section) -> Vec<&FeedItem> {
    items.iter().filter(|i| i.in_section(section)).collect()
}

/// Items whose type label (with the REAL fallback) equals `type_label`
pub fn filter_type<'a>(items: &'a [FeedItem], type_label: &str) -> Vec<&'a FeedItem> {
    items
        .iter()
        .filter(|i| i.type_label() == type_label)
        .collect()
}

/// Clear `grid` and render up to `max_count` cards in input order.
///
/// An empty input leaves the grid empty and shows the empty-state indicator;
/// otherwise the indicator is hidden. Returns the number of cards rendered.
pub fn render_grid<S: Surface>(
    surface: &mut S,
    grid: GridKind,
    items: &[&FeedItem],
    max_count: usize,
    now: DateTime<Utc>,
) -> usize {
    surface.clear(Target::Grid(grid));

    if items.is_empty() {
        surface.set_visible(Target::EmptyState(grid), true);
        return 0;
    }

    let shown = items.len().min(max_count);
    for item in &items[..shown] {
        surface.append(Target::Grid(grid), card_node(item, &classify(item, now)));
    }
    surface.set_visible(Target::EmptyState(grid), false);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Document, Node};
    use crate::test_utils::{now, test_item};

    fn data_id(node: &Node) -> Option<&str> {
        match node {
            Node::Element(el) => el.get_attr("data-id"),
            Node::Text(_) => None,
        }
    }

    #[test]
    fn empty_input_shows_empty_state() {
        let mut doc = Document::new();

        let shown = render_grid(&mut doc, GridKind::Meme, &[], 6, now());

        assert_eq!(shown, 0);
        assert!(doc.children(Target::Grid(GridKind::Meme)).is_empty());
        assert!(doc.is_visible(Target::EmptyState(GridKind::Meme)));
    }

    #[test]
    fn non_empty_input_hides_empty_state() {
        let mut doc = Document::new();
        render_grid(&mut doc, GridKind::Sports, &[], 6, now());
        let item = test_item("sports_1", "SPORTS");

        let shown = render_grid(&mut doc, GridKind::Sports, &[&item], 6, now());

        assert_eq!(shown, 1);
        assert!(!doc.is_visible(Target::EmptyState(GridKind::Sports)));
    }

    #[test]
    fn renders_bounded_count_in_order() {
        let items: Vec<FeedItem> = (0..8)
            .map(|i| test_item(&format!("latest_{}", i), "LATEST"))
            .collect();
        let refs: Vec<&FeedItem> = items.iter().rev().collect();
        let mut doc = Document::new();

        let shown = render_grid(&mut doc, GridKind::Latest, &refs, 3, now());

        assert_eq!(shown, 3);
        let ids: Vec<&str> = doc
            .children(Target::Grid(GridKind::Latest))
            .iter()
            .filter_map(data_id)
            .collect();
        assert_eq!(ids, vec!["latest_7", "latest_6", "latest_5"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let item = test_item("latest_1", "LATEST");
        let mut doc = Document::new();

        let shown = render_grid(&mut doc, GridKind::Archive, &[&item, &item], 12, now());

        assert_eq!(shown, 2);
    }

    #[test]
    fn rerender_clears_previous_cards() {
        let a = test_item("a", "LATEST");
        let b = test_item("b", "LATEST");
        let mut doc = Document::new();

        render_grid(&mut doc, GridKind::Latest, &[&a, &b], 9, now());
        render_grid(&mut doc, GridKind::Latest, &[&b], 9, now());

        assert_eq!(doc.children(Target::Grid(GridKind::Latest)).len(), 1);
    }

    #[test]
    fn filters_by_section_and_type() {
        let mut meme = test_item("meme_1", "MEME");
        meme.kind = Some("MEME".to_string());
        let mut untyped = test_item("latest_2", "LATEST");
        untyped.kind = None;
        let items = vec![test_item("latest_1", "LATEST"), meme, untyped];

        let latest: Vec<&str> = filter_section(&items, Section::Latest)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        let real: Vec<&str> = filter_type(&items, "REAL")
            .iter()
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(latest, vec!["latest_1", "latest_2"]);
        assert_eq!(real, vec!["latest_1", "latest_2"]);
        assert_eq!(filter_type(&items, "MEME").len(), 1);
    }
}
