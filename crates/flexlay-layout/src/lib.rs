#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Flexbox layout engine for flexlay node trees.
//!
//! Given a tree of [`Node`]s annotated with sizing and spacing rules and the
//! space available to the root, the engine computes a concrete border and
//! content rectangle for every node:
//!
//! - **Flex containers**: flex basis, line wrapping, grow/shrink, `justify-content`,
//!   `align-items`/`align-self` and `align-content`, in both axis directions
//! - **Grid containers**: placeholder stacking of children at the content origin
//! - **Nesting**: child containers are laid out inside their parent's result and
//!   everything is reported in root coordinates
//!
//! # Example
//!
//! ```
//! use flexlay_core::{FlexContainerProps, Node, NodeId, Rect, Size};
//! use flexlay_layout::layout;
//!
//! let root = Node::flex(1, FlexContainerProps::row().gap(10.0))
//!     .with_child(Node::leaf(2, Size::new(50.0, 30.0)))
//!     .with_child(Node::leaf(3, Size::new(50.0, 30.0)));
//!
//! let result = layout(&root, 200.0, 100.0);
//! assert_eq!(result.get(NodeId(3)).unwrap().border_rect, Rect::new(60.0, 0.0, 50.0, 100.0));
//! ```

mod axis;
mod engine;
mod error;
mod flex;
mod grid;
mod options;
mod result;

pub use engine::{layout, try_layout, LayoutEngine};
pub use error::{validate, LayoutError};
pub use options::{FlexResolution, LayoutOptions};
pub use result::{ComputedLayout, LayoutResult};

pub use flexlay_core::{Node, NodeId, Rect, Size};
