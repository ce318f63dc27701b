//! Layout errors and tree validation.

use std::collections::HashSet;

use flexlay_core::{ContainerKind, Dimension, Node, NodeId, Size};
use thiserror::Error;

/// Reasons a tree cannot be laid out as given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Available width or height is negative, NaN or infinite.
    #[error("Invalid available space: {width}x{height} (must be finite and non-negative)")]
    InvalidAvailableSpace { width: f64, height: f64 },

    /// Two nodes share an id.
    #[error("Duplicate node id {0}")]
    DuplicateNodeId(NodeId),

    /// A node with no container kind has children.
    #[error("Leaf node {id} has {count} children")]
    LeafWithChildren { id: NodeId, count: usize },

    /// A length, factor or inset is negative, NaN or infinite.
    #[error("Invalid {field} on node {id}: {value} (must be finite and non-negative)")]
    InvalidValue {
        id: NodeId,
        field: &'static str,
        value: f64,
    },
}

fn is_valid_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Check that `root` and `available` meet the engine's preconditions.
///
/// # Errors
///
/// Returns the first [`LayoutError`] found in pre-order.
pub fn validate(root: &Node, available: Size) -> Result<(), LayoutError> {
    if !is_valid_length(available.width) || !is_valid_length(available.height) {
        return Err(LayoutError::InvalidAvailableSpace {
            width: available.width,
            height: available.height,
        });
    }

    let mut seen = HashSet::new();
    for node in root.walk() {
        if !seen.insert(node.id) {
            return Err(LayoutError::DuplicateNodeId(node.id));
        }
        if !node.is_container() && !node.children.is_empty() {
            return Err(LayoutError::LeafWithChildren {
                id: node.id,
                count: node.children.len(),
            });
        }
        validate_node(node)?;
    }
    Ok(())
}

fn validate_node(node: &Node) -> Result<(), LayoutError> {
    let check = |field: &'static str, value: f64| {
        if is_valid_length(value) {
            Ok(())
        } else {
            Err(LayoutError::InvalidValue {
                id: node.id,
                field,
                value,
            })
        }
    };
    let check_dimension = |field: &'static str, dimension: Dimension| match dimension {
        Dimension::Length(value) | Dimension::Percent(value) => check(field, value),
        Dimension::Auto | Dimension::MinContent | Dimension::MaxContent => Ok(()),
    };

    let c = &node.constraints;
    check_dimension("width", c.width)?;
    check_dimension("height", c.height)?;
    check("min_width", c.min_width)?;
    check("min_height", c.min_height)?;
    if let Some(max_width) = c.max_width {
        check("max_width", max_width)?;
    }
    if let Some(max_height) = c.max_height {
        check("max_height", max_height)?;
    }

    for side in node.margin.sides() {
        check("margin", side)?;
    }
    for side in node.padding.sides() {
        check("padding", side)?;
    }
    if let Some(content) = node.content_size {
        check("content_size.width", content.width)?;
        check("content_size.height", content.height)?;
    }

    if let Some(item) = &node.item {
        check("grow", item.grow)?;
        check("shrink", item.shrink)?;
        check_dimension("basis", item.basis)?;
    }

    match &node.kind {
        ContainerKind::None => {}
        ContainerKind::Flex(props) => {
            check("gap", props.gap)?;
            check("row_gap", props.row_gap)?;
        }
        ContainerKind::Grid(props) => {
            check("column_gap", props.column_gap)?;
            check("row_gap", props.row_gap)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlay_core::{
        BoxConstraints, EdgeInsets, FlexContainerProps, FlexItemProps, GridProps,
    };

    fn tree() -> Node {
        Node::flex(1, FlexContainerProps::row()).with_children([
            Node::leaf(2, Size::new(10.0, 10.0)),
            Node::leaf(3, Size::new(10.0, 10.0)),
        ])
    }

    #[test]
    fn test_valid_tree() {
        assert_eq!(validate(&tree(), Size::new(100.0, 100.0)), Ok(()));
    }

    #[test]
    fn test_zero_available_space_is_valid() {
        assert!(validate(&tree(), Size::ZERO).is_ok());
    }

    #[test]
    fn test_invalid_available_space() {
        for size in [
            Size::new(-1.0, 10.0),
            Size::new(10.0, f64::NAN),
            Size::new(f64::INFINITY, 10.0),
        ] {
            assert!(matches!(
                validate(&tree(), size),
                Err(LayoutError::InvalidAvailableSpace { .. })
            ));
        }
    }

    #[test]
    fn test_duplicate_id() {
        let root = tree().with_child(Node::leaf(2, Size::ZERO));
        assert_eq!(
            validate(&root, Size::new(100.0, 100.0)),
            Err(LayoutError::DuplicateNodeId(NodeId(2)))
        );
    }

    #[test]
    fn test_leaf_with_children() {
        let mut leaf = Node::leaf(1, Size::ZERO);
        leaf.children.push(Node::leaf(2, Size::ZERO));
        assert_eq!(
            validate(&leaf, Size::new(100.0, 100.0)),
            Err(LayoutError::LeafWithChildren {
                id: NodeId(1),
                count: 1
            })
        );
    }

    fn invalid_field(node: Node) -> &'static str {
        match validate(&node, Size::new(100.0, 100.0)) {
            Err(LayoutError::InvalidValue { field, .. }) => field,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_lengths() {
        let leaf = || Node::leaf(1, Size::ZERO);
        assert_eq!(
            invalid_field(leaf().with_constraints(
                BoxConstraints::new().with_width(Dimension::Length(-5.0))
            )),
            "width"
        );
        assert_eq!(
            invalid_field(leaf().with_constraints(BoxConstraints::new().with_min_height(-1.0))),
            "min_height"
        );
        assert_eq!(
            invalid_field(leaf().with_constraints(BoxConstraints::new().with_max_width(f64::NAN))),
            "max_width"
        );
        assert_eq!(
            invalid_field(leaf().with_margin(EdgeInsets::new(0.0, -2.0, 0.0, 0.0))),
            "margin"
        );
        assert_eq!(
            invalid_field(leaf().with_padding(EdgeInsets::all(f64::INFINITY))),
            "padding"
        );
        assert_eq!(
            invalid_field(Node::leaf(1, Size::new(-3.0, 1.0))),
            "content_size.width"
        );
    }

    #[test]
    fn test_invalid_flex_factors() {
        let leaf = Node::leaf(1, Size::ZERO).with_item(FlexItemProps::new().grow(-1.0));
        assert_eq!(invalid_field(leaf), "grow");
        let leaf = Node::leaf(1, Size::ZERO).with_item(FlexItemProps::new().shrink(f64::NAN));
        assert_eq!(invalid_field(leaf), "shrink");
    }

    #[test]
    fn test_invalid_gaps() {
        assert_eq!(
            invalid_field(Node::flex(1, FlexContainerProps::row().gap(-4.0))),
            "gap"
        );
        assert_eq!(
            invalid_field(Node::grid(1, GridProps::new().with_gap(-4.0))),
            "column_gap"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LayoutError::DuplicateNodeId(NodeId(7));
        assert!(err.to_string().contains("#7"));
        let err = LayoutError::InvalidValue {
            id: NodeId(3),
            field: "grow",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("grow"));
        assert!(msg.contains("#3"));
        assert!(msg.contains("-1"));
    }
}
