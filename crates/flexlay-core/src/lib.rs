//! Core types for the flexlay layout engine.
//!
//! This crate provides the immutable input model consumed by `flexlay-layout`:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`EdgeInsets`]
//! - Sizing: [`Dimension`], [`BoxConstraints`]
//! - Container properties: [`FlexContainerProps`], [`FlexItemProps`], [`GridProps`]
//! - The tree itself: [`Node`], [`NodeId`], [`ContainerKind`]

mod constraints;
mod flex;
mod geometry;
mod grid;
mod node;

pub use constraints::{clamp_size, BoxConstraints, Dimension, UNBOUNDED};
pub use flex::{
    AlignContent, AlignItems, FlexContainerProps, FlexDirection, FlexItemProps, FlexWrap,
    JustifyContent,
};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use grid::{GridProps, TrackSize};
pub use node::{ContainerKind, Node, NodeId};
