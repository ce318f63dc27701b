//! Flex item collection and flex-basis resolution.

use flexlay_core::{clamp_size, AlignItems, Dimension, Node, Size};
use log::trace;

use crate::axis::AxisContext;

/// Per-item working state for one container layout.
#[derive(Debug, Clone)]
pub(crate) struct FlexItemState<'a> {
    pub(crate) node: &'a Node,
    /// (start, end) margins along the main axis
    pub(crate) main_margin: (f64, f64),
    /// (start, end) margins along the cross axis
    pub(crate) cross_margin: (f64, f64),
    pub(crate) flex_basis: f64,
    pub(crate) hypothetical_main: f64,
    pub(crate) min_main: f64,
    pub(crate) max_main: f64,
    pub(crate) hypothetical_cross: f64,
    pub(crate) min_cross: f64,
    pub(crate) max_cross: f64,
    pub(crate) grow: f64,
    pub(crate) shrink: f64,
    pub(crate) align_self: Option<AlignItems>,
    pub(crate) frozen: bool,
    pub(crate) main_size: f64,
    pub(crate) cross_size: f64,
    /// Position of the border box along the main axis, relative to the content box
    pub(crate) main_offset: f64,
    /// Position of the border box along the cross axis, relative to the line
    pub(crate) cross_offset: f64,
}

impl FlexItemState<'_> {
    pub(crate) fn main_margin_sum(&self) -> f64 {
        self.main_margin.0 + self.main_margin.1
    }

    pub(crate) fn cross_margin_sum(&self) -> f64 {
        self.cross_margin.0 + self.cross_margin.1
    }

    /// Hypothetical main size plus main margins.
    pub(crate) fn outer_hypothetical_main(&self) -> f64 {
        self.hypothetical_main + self.main_margin_sum()
    }

    /// Resolved main size plus main margins.
    pub(crate) fn outer_main(&self) -> f64 {
        self.main_size + self.main_margin_sum()
    }

    /// Hypothetical cross size plus cross margins.
    pub(crate) fn outer_hypothetical_cross(&self) -> f64 {
        self.hypothetical_cross + self.cross_margin_sum()
    }

    /// `align-self`, falling back to the container's `align-items`.
    pub(crate) fn effective_align(&self, align_items: AlignItems) -> AlignItems {
        self.align_self.unwrap_or(align_items)
    }

    pub(crate) fn clamp_main(&self, size: f64) -> f64 {
        clamp_size(size, self.min_main, self.max_main)
    }

    pub(crate) fn clamp_cross(&self, size: f64) -> f64 {
        clamp_size(size, self.min_cross, self.max_cross)
    }
}

/// Content size the host measured; containers never contribute one.
pub(crate) fn measured_size(node: &Node) -> Size {
    if node.is_container() {
        Size::ZERO
    } else {
        node.content_size_or_zero()
    }
}

/// Build one [`FlexItemState`] per child, in order.
pub(crate) fn collect_items<'a>(
    axis: &AxisContext,
    children: &'a [Node],
    available_main: f64,
    available_cross: f64,
) -> Vec<FlexItemState<'a>> {
    children
        .iter()
        .map(|node| collect_item(axis, node, available_main, available_cross))
        .collect()
}

fn collect_item<'a>(
    axis: &AxisContext,
    node: &'a Node,
    available_main: f64,
    available_cross: f64,
) -> FlexItemState<'a> {
    let props = node.item_or_default();
    let measured = measured_size(node);
    let content_main = axis.main(measured);
    let content_cross = axis.cross(measured);

    let flex_basis = match props.basis {
        Dimension::Auto => axis
            .main_dimension(&node.constraints)
            .resolve(available_main, content_main)
            .unwrap_or(content_main),
        basis => basis
            .resolve(available_main, content_main)
            .unwrap_or(content_main),
    };
    let preferred_cross = axis
        .cross_dimension(&node.constraints)
        .resolve(available_cross, content_cross)
        .unwrap_or(content_cross);

    let (min_main, max_main) = axis.main_limits(&node.constraints);
    let (min_cross, max_cross) = axis.cross_limits(&node.constraints);
    let hypothetical_main = clamp_size(flex_basis, min_main, max_main);
    let hypothetical_cross = clamp_size(preferred_cross, min_cross, max_cross);

    trace!(
        "[FLEX-ITEM] node={} basis={flex_basis:.3} hyp_main={hypothetical_main:.3} hyp_cross={hypothetical_cross:.3}",
        node.id
    );

    FlexItemState {
        node,
        main_margin: axis.main_insets(&node.margin),
        cross_margin: axis.cross_insets(&node.margin),
        flex_basis,
        hypothetical_main,
        min_main,
        max_main,
        hypothetical_cross,
        min_cross,
        max_cross,
        grow: props.grow,
        shrink: props.shrink,
        align_self: props.align_self,
        frozen: false,
        main_size: hypothetical_main,
        cross_size: hypothetical_cross,
        main_offset: 0.0,
        cross_offset: 0.0,
    }
}
