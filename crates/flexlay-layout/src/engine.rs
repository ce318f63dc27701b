//! Layout engine implementation.

use flexlay_core::{ContainerKind, Dimension, Node, Point, Rect, Size};
use log::{debug, trace};

use crate::error::{validate, LayoutError};
use crate::flex::{layout_flex_children, measured_size};
use crate::grid::layout_grid_children;
use crate::options::LayoutOptions;
use crate::result::{ComputedLayout, LayoutResult};

/// Layout engine: walks a node tree and produces one rectangle per node.
///
/// The engine holds only its options; every call to [`LayoutEngine::compute`]
/// builds fresh working state, so one engine can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
}

impl LayoutEngine {
    /// Create a new layout engine with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options.
    #[must_use]
    pub const fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Compute layout for the tree rooted at `root` within `available` space.
    ///
    /// Never fails; see [`LayoutEngine::try_compute`] for a validating variant.
    #[must_use]
    pub fn compute(&self, root: &Node, available: Size) -> LayoutResult {
        debug!(
            "[LAYOUT] root={} available={:.3}x{:.3} strategy={:?}",
            root.id, available.width, available.height, self.options.flex_resolution
        );

        let origin = Point::new(root.margin.left, root.margin.top);
        let size = resolve_box_size(root, available);
        let root_layout =
            ComputedLayout::new(root.id, Rect::from_origin_size(origin, size), &root.padding);

        let result = LayoutResult::single(root_layout).merge(self.layout_descendants(root, &root_layout));
        debug!("[LAYOUT] done nodes={}", result.len());
        result
    }

    /// Validate the tree, then compute its layout.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the tree or the available space is invalid.
    pub fn try_compute(&self, root: &Node, available: Size) -> Result<LayoutResult, LayoutError> {
        validate(root, available)?;
        Ok(self.compute(root, available))
    }

    /// Lay out the children of an already placed node, then recurse into
    /// every child container. The node's own entry is not included.
    fn layout_descendants(&self, node: &Node, layout: &ComputedLayout) -> LayoutResult {
        let children = match &node.kind {
            ContainerKind::None => return LayoutResult::new(),
            ContainerKind::Flex(props) => {
                layout_flex_children(node, props, layout.content_rect, &self.options)
            }
            ContainerKind::Grid(props) => layout_grid_children(node, props, layout.content_rect),
        };

        node.children
            .iter()
            .filter(|child| child.is_container())
            .fold(children, |acc, child| match acc.get(child.id).copied() {
                Some(child_layout) => {
                    let descendants = self.layout_descendants(child, &child_layout);
                    acc.merge(descendants)
                }
                None => acc,
            })
    }
}

/// Border-box size of a node placed directly in `available` space.
///
/// `Auto` fills the space left after margins for a container and takes the
/// measured content size for a leaf. The result is clamped to the node's
/// min/max constraints.
pub(crate) fn resolve_box_size(node: &Node, available: Size) -> Size {
    let content = measured_size(node);
    let auto = if node.is_container() {
        Size::new(
            (available.width - node.margin.horizontal()).max(0.0),
            (available.height - node.margin.vertical()).max(0.0),
        )
    } else {
        content
    };

    let resolve = |dimension: Dimension, available: f64, content: f64, auto: f64| {
        dimension.resolve(available, content).unwrap_or(auto)
    };
    let width = resolve(node.constraints.width, available.width, content.width, auto.width);
    let height = resolve(node.constraints.height, available.height, content.height, auto.height);
    let size = Size::new(
        node.constraints.clamp_width(width),
        node.constraints.clamp_height(height),
    );
    trace!(
        "[LAYOUT] box node={} size={:.3}x{:.3}",
        node.id,
        size.width,
        size.height
    );
    size
}

/// Compute layout with default options.
#[must_use]
pub fn layout(root: &Node, available_width: f64, available_height: f64) -> LayoutResult {
    LayoutEngine::new().compute(root, Size::new(available_width, available_height))
}

/// Validate, then compute layout with default options.
///
/// # Errors
///
/// Returns a [`LayoutError`] if the tree or the available space is invalid.
pub fn try_layout(
    root: &Node,
    available_width: f64,
    available_height: f64,
) -> Result<LayoutResult, LayoutError> {
    LayoutEngine::new().try_compute(root, Size::new(available_width, available_height))
}
