//! Grid containers.
//!
//! Track sizing is not implemented: every child is sized against the whole
//! content box, as a root would be, and stacked at the content origin. Track
//! definitions in [`GridProps`] are carried through untouched.

use flexlay_core::{GridProps, Node, Point, Rect};
use log::debug;

use crate::engine::resolve_box_size;
use crate::result::{ComputedLayout, LayoutResult};

/// Lay out the direct children of a grid `node` inside `content_box`.
pub(crate) fn layout_grid_children(node: &Node, props: &GridProps, content_box: Rect) -> LayoutResult {
    debug!(
        "[GRID] container={} columns={} rows={} children={} (stacked)",
        node.id,
        props.columns.len(),
        props.rows.len(),
        node.children.len()
    );

    node.children
        .iter()
        .map(|child| {
            let origin = Point::new(
                content_box.x + child.margin.left,
                content_box.y + child.margin.top,
            );
            let size = resolve_box_size(child, content_box.size());
            ComputedLayout::new(child.id, Rect::from_origin_size(origin, size), &child.padding)
        })
        .collect()
}
