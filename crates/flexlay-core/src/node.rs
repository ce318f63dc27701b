//! Layout tree nodes.
//!
//! A [`Node`] is an immutable description of one box: its sizing constraints,
//! spacing, container kind and children. Leaves carry a content size measured
//! by the host (text shaping, images); the layout engine never measures content.
//!
//! # Examples
//!
//! ```
//! use flexlay_core::{FlexContainerProps, FlexItemProps, Node, NodeId, Size};
//!
//! let root = Node::flex(1, FlexContainerProps::row().gap(8.0))
//!     .with_child(Node::leaf(2, Size::new(50.0, 30.0)))
//!     .with_child(Node::leaf(3, Size::new(60.0, 30.0)).with_item(FlexItemProps::new().grow(1.0)));
//!
//! assert_eq!(root.id, NodeId::new(1));
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.descendant_count(), 3);
//! ```

use crate::constraints::BoxConstraints;
use crate::flex::{FlexContainerProps, FlexItemProps};
use crate::geometry::{EdgeInsets, Size};
use crate::grid::GridProps;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a node, unique within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a node arranges its children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    /// Leaf node without children
    #[default]
    None,
    /// Flexbox container
    Flex(FlexContainerProps),
    /// Grid container (children are stacked, tracks are not sized)
    Grid(GridProps),
}

impl ContainerKind {
    /// Whether this kind lays out children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One box in the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node identity
    pub id: NodeId,
    /// Width/height preferences and clamps
    #[serde(default)]
    pub constraints: BoxConstraints,
    /// Outer spacing
    #[serde(default)]
    pub margin: EdgeInsets,
    /// Inner spacing
    #[serde(default)]
    pub padding: EdgeInsets,
    /// Container kind
    #[serde(default)]
    pub kind: ContainerKind,
    /// Flex item properties used when the parent is a flex container
    #[serde(default)]
    pub item: Option<FlexItemProps>,
    /// Ordered children (empty for leaves)
    #[serde(default)]
    pub children: Vec<Node>,
    /// Measured content size (leaves only)
    #[serde(default)]
    pub content_size: Option<Size>,
}

impl Node {
    /// Create a node with default constraints and no children.
    #[must_use]
    pub fn new(id: u64, kind: ContainerKind) -> Self {
        Self {
            id: NodeId(id),
            constraints: BoxConstraints::default(),
            margin: EdgeInsets::ZERO,
            padding: EdgeInsets::ZERO,
            kind,
            item: None,
            children: Vec::new(),
            content_size: None,
        }
    }

    /// Create a leaf with a measured content size.
    #[must_use]
    pub fn leaf(id: u64, content_size: Size) -> Self {
        Self {
            content_size: Some(content_size),
            ..Self::new(id, ContainerKind::None)
        }
    }

    /// Create a flex container.
    #[must_use]
    pub fn flex(id: u64, props: FlexContainerProps) -> Self {
        Self::new(id, ContainerKind::Flex(props))
    }

    /// Create a grid container.
    #[must_use]
    pub fn grid(id: u64, props: GridProps) -> Self {
        Self::new(id, ContainerKind::Grid(props))
    }

    /// Set the sizing constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: BoxConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    /// Set the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set flex item properties.
    #[must_use]
    pub fn with_item(mut self, item: FlexItemProps) -> Self {
        self.item = Some(item);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether this node lays out children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Measured content size, zero when absent.
    #[must_use]
    pub fn content_size_or_zero(&self) -> Size {
        self.content_size.unwrap_or(Size::ZERO)
    }

    /// Flex item properties, defaulted when absent.
    #[must_use]
    pub fn item_or_default(&self) -> FlexItemProps {
        self.item.unwrap_or_default()
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::descendant_count)
            .sum::<usize>()
    }

    /// Depth-first, pre-order walk over this subtree.
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
