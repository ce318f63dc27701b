//! Flexbox layout of a single container's children.
//!
//! The pipeline runs per container:
//!
//! 1. collect items and resolve flex basis / hypothetical sizes
//! 2. partition items into lines
//! 3. resolve flexible lengths per line
//! 4. size and position lines (`align-content`)
//! 5. size items on the cross axis, then justify and cross-align them
//!
//! Positions are produced in the container's content box and translated to
//! the coordinate space of the root before returning.

mod align;
mod items;
mod lines;
mod resolve;

pub(crate) use items::measured_size;

use flexlay_core::{FlexContainerProps, FlexWrap, Node, Rect};
use log::debug;

use crate::axis::AxisContext;
use crate::options::LayoutOptions;
use crate::result::{ComputedLayout, LayoutResult};

/// Lay out the direct children of `node` inside `content_box`.
///
/// Only the children are returned; descendants are the caller's concern.
pub(crate) fn layout_flex_children(
    node: &Node,
    props: &FlexContainerProps,
    content_box: Rect,
    options: &LayoutOptions,
) -> LayoutResult {
    let axis = AxisContext::new(props.direction);
    let available = content_box.size();
    let available_main = axis.main(available);
    let available_cross = axis.cross(available);

    debug!(
        "[FLEX] container={} direction={:?} wrap={:?} main_reversed={} available={:.3}x{:.3} children={}",
        node.id,
        props.direction,
        props.wrap,
        axis.main_reversed(),
        available.width,
        available.height,
        node.children.len()
    );

    let items = items::collect_items(&axis, &node.children, available_main, available_cross);
    let mut lines = lines::partition_lines(items, props.wrap, available_main, props.gap);

    for line in &mut lines {
        resolve::resolve_flexible_lengths(line, available_main, props.gap, options.flex_resolution);
    }

    align::align_content(
        &mut lines,
        props.align_content,
        props.wrap == FlexWrap::NoWrap,
        available_cross,
        props.row_gap,
    );

    for line in &mut lines {
        align::size_cross(line, props.align_items);
        align::justify_line(
            line,
            props.justify_content,
            available_main,
            props.gap,
            axis.main_reversed(),
        );
        align::align_cross(line, props.align_items);
    }

    lines
        .iter()
        .flat_map(|line| {
            line.items.iter().map(move |item| {
                let origin = axis.point(item.main_offset, line.cross_position + item.cross_offset);
                let size = axis.size(item.main_size, item.cross_size);
                ComputedLayout::new(
                    item.node.id,
                    Rect::from_origin_size(origin, size),
                    &item.node.padding,
                )
            })
        })
        .collect::<LayoutResult>()
        .translate(content_box.x, content_box.y)
}
