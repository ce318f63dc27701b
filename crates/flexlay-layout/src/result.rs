//! Computed rectangles keyed by node identity.

use flexlay_core::{EdgeInsets, NodeId, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final geometry of one node, in root coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedLayout {
    /// Node identity
    pub id: NodeId,
    /// Outer rectangle (excludes margin)
    pub border_rect: Rect,
    /// Border rectangle minus padding
    pub content_rect: Rect,
}

impl ComputedLayout {
    /// Build from a border rectangle and the node's padding.
    #[must_use]
    pub fn new(id: NodeId, border_rect: Rect, padding: &EdgeInsets) -> Self {
        Self {
            id,
            border_rect,
            content_rect: border_rect.deflate(padding),
        }
    }

    /// Move both rectangles by an offset.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            id: self.id,
            border_rect: self.border_rect.translate(dx, dy),
            content_rect: self.content_rect.translate(dx, dy),
        }
    }
}

/// Layout of a whole tree: exactly one [`ComputedLayout`] per node.
///
/// Values are combined by consuming fold steps ([`LayoutResult::with`],
/// [`LayoutResult::merge`], [`LayoutResult::translate`]) that each return a new
/// result; nothing is mutated behind a shared reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutResult {
    layouts: BTreeMap<NodeId, ComputedLayout>,
}

impl LayoutResult {
    /// Empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Result holding a single entry.
    #[must_use]
    pub fn single(layout: ComputedLayout) -> Self {
        Self::new().with(layout)
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ComputedLayout> {
        self.layouts.get(&id)
    }

    /// Whether a node has an entry.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.layouts.contains_key(&id)
    }

    /// Add or replace one entry.
    #[must_use]
    pub fn with(mut self, layout: ComputedLayout) -> Self {
        if self.layouts.insert(layout.id, layout).is_some() {
            log::warn!("[LAYOUT] replaced existing entry for node {}", layout.id);
        }
        self
    }

    /// Move every entry by an offset.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            layouts: self
                .layouts
                .into_iter()
                .map(|(id, layout)| (id, layout.translate(dx, dy)))
                .collect(),
        }
    }

    /// Union of two results; entries from `other` win on a shared id.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        other.layouts.into_values().fold(self, Self::with)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether the result is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Entries ordered by node id.
    pub fn iter(&self) -> impl Iterator<Item = &ComputedLayout> {
        self.layouts.values()
    }
}

impl FromIterator<ComputedLayout> for LayoutResult {
    fn from_iter<I: IntoIterator<Item = ComputedLayout>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a ComputedLayout;
    type IntoIter = std::collections::btree_map::Values<'a, NodeId, ComputedLayout>;

    fn into_iter(self) -> Self::IntoIter {
        self.layouts.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, x: f64, y: f64) -> ComputedLayout {
        ComputedLayout::new(NodeId(id), Rect::new(x, y, 10.0, 10.0), &EdgeInsets::ZERO)
    }

    #[test]
    fn test_content_rect_subtracts_padding() {
        let layout = ComputedLayout::new(
            NodeId(1),
            Rect::new(10.0, 10.0, 100.0, 50.0),
            &EdgeInsets::all(5.0),
        );
        assert_eq!(layout.content_rect, Rect::new(15.0, 15.0, 90.0, 40.0));
    }

    #[test]
    fn test_empty_result() {
        let result = LayoutResult::new();
        assert!(result.is_empty());
        assert_eq!(result.get(NodeId(1)), None);
    }

    #[test]
    fn test_translate_moves_every_entry() {
        let result: LayoutResult = [entry(1, 0.0, 0.0), entry(2, 5.0, 5.0)].into_iter().collect();
        let moved = result.translate(10.0, 20.0);
        assert_eq!(moved.get(NodeId(1)).unwrap().border_rect.x, 10.0);
        assert_eq!(moved.get(NodeId(2)).unwrap().content_rect.y, 25.0);
    }

    #[test]
    fn test_merge_unions_entries() {
        let a = LayoutResult::single(entry(1, 0.0, 0.0));
        let b = LayoutResult::single(entry(2, 1.0, 1.0));
        let merged = a.merge(b);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(NodeId(1)));
        assert!(merged.contains(NodeId(2)));
    }

    #[test]
    fn test_merge_other_wins_on_collision() {
        let a = LayoutResult::single(entry(1, 0.0, 0.0));
        let b = LayoutResult::single(entry(1, 7.0, 0.0));
        let merged = a.merge(b);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(NodeId(1)).unwrap().border_rect.x, 7.0);
    }

    #[test]
    fn test_iter_is_ordered_by_id() {
        let result: LayoutResult = [entry(3, 0.0, 0.0), entry(1, 0.0, 0.0), entry(2, 0.0, 0.0)]
            .into_iter()
            .collect();
        let ids: Vec<u64> = result.iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_serializes_as_map() {
        let result = LayoutResult::single(entry(4, 0.0, 0.0));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("4").is_some());
    }
}
