//! Main/cross axis abstraction.
//!
//! Every flex phase is written against "main" and "cross" extents. An
//! [`AxisContext`] is built once per container and maps those logical values
//! onto physical x/y and width/height.

use flexlay_core::{BoxConstraints, Dimension, EdgeInsets, FlexDirection, Point, Size};
use std::fmt;
use std::ops::Deref;

/// Physical mapping of the main and cross axes.
pub(crate) trait FlexAxis: fmt::Debug + Sync {
    /// Extent of `size` along the main axis.
    fn main(&self, size: Size) -> f64;

    /// Extent of `size` along the cross axis.
    fn cross(&self, size: Size) -> f64;

    /// Physical point from a (main, cross) position.
    fn point(&self, main: f64, cross: f64) -> Point;

    /// Physical size from (main, cross) extents.
    fn size(&self, main: f64, cross: f64) -> Size;

    /// (start, end) insets along the main axis.
    fn main_insets(&self, insets: &EdgeInsets) -> (f64, f64);

    /// (start, end) insets along the cross axis.
    fn cross_insets(&self, insets: &EdgeInsets) -> (f64, f64);

    /// Preferred main size.
    fn main_dimension(&self, constraints: &BoxConstraints) -> Dimension;

    /// Preferred cross size.
    fn cross_dimension(&self, constraints: &BoxConstraints) -> Dimension;

    /// (min, max) along the main axis.
    fn main_limits(&self, constraints: &BoxConstraints) -> (f64, f64);

    /// (min, max) along the cross axis.
    fn cross_limits(&self, constraints: &BoxConstraints) -> (f64, f64);
}

/// Main axis runs along x.
#[derive(Debug)]
struct Horizontal;

/// Main axis runs along y.
#[derive(Debug)]
struct Vertical;

static HORIZONTAL: Horizontal = Horizontal;
static VERTICAL: Vertical = Vertical;

impl FlexAxis for Horizontal {
    fn main(&self, size: Size) -> f64 {
        size.width
    }

    fn cross(&self, size: Size) -> f64 {
        size.height
    }

    fn point(&self, main: f64, cross: f64) -> Point {
        Point::new(main, cross)
    }

    fn size(&self, main: f64, cross: f64) -> Size {
        Size::new(main, cross)
    }

    fn main_insets(&self, insets: &EdgeInsets) -> (f64, f64) {
        (insets.left, insets.right)
    }

    fn cross_insets(&self, insets: &EdgeInsets) -> (f64, f64) {
        (insets.top, insets.bottom)
    }

    fn main_dimension(&self, constraints: &BoxConstraints) -> Dimension {
        constraints.width
    }

    fn cross_dimension(&self, constraints: &BoxConstraints) -> Dimension {
        constraints.height
    }

    fn main_limits(&self, constraints: &BoxConstraints) -> (f64, f64) {
        (constraints.min_width, constraints.max_width_or_unbounded())
    }

    fn cross_limits(&self, constraints: &BoxConstraints) -> (f64, f64) {
        (constraints.min_height, constraints.max_height_or_unbounded())
    }
}

impl FlexAxis for Vertical {
    fn main(&self, size: Size) -> f64 {
        size.height
    }

    fn cross(&self, size: Size) -> f64 {
        size.width
    }

    fn point(&self, main: f64, cross: f64) -> Point {
        Point::new(cross, main)
    }

    fn size(&self, main: f64, cross: f64) -> Size {
        Size::new(cross, main)
    }

    fn main_insets(&self, insets: &EdgeInsets) -> (f64, f64) {
        (insets.top, insets.bottom)
    }

    fn cross_insets(&self, insets: &EdgeInsets) -> (f64, f64) {
        (insets.left, insets.right)
    }

    fn main_dimension(&self, constraints: &BoxConstraints) -> Dimension {
        constraints.height
    }

    fn cross_dimension(&self, constraints: &BoxConstraints) -> Dimension {
        constraints.width
    }

    fn main_limits(&self, constraints: &BoxConstraints) -> (f64, f64) {
        (constraints.min_height, constraints.max_height_or_unbounded())
    }

    fn cross_limits(&self, constraints: &BoxConstraints) -> (f64, f64) {
        (constraints.min_width, constraints.max_width_or_unbounded())
    }
}

/// Axis mapping plus main-axis reversal for one container.
///
/// `wrap-reverse` is not tracked here: it only reorders lines.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisContext {
    axis: &'static dyn FlexAxis,
    main_reversed: bool,
}

impl AxisContext {
    pub(crate) fn new(direction: FlexDirection) -> Self {
        let axis: &'static dyn FlexAxis = if direction.is_row() {
            &HORIZONTAL
        } else {
            &VERTICAL
        };
        Self {
            axis,
            main_reversed: direction.is_reverse(),
        }
    }

    /// `row-reverse` / `column-reverse`.
    pub(crate) const fn main_reversed(&self) -> bool {
        self.main_reversed
    }
}

impl Deref for AxisContext {
    type Target = dyn FlexAxis;

    fn deref(&self) -> &Self::Target {
        self.axis
    }
}
