//! Flexbox container and item properties.

use crate::constraints::Dimension;
use serde::{Deserialize, Serialize};

/// Direction for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Horizontal (left to right)
    #[default]
    Row,
    /// Horizontal (right to left)
    RowReverse,
    /// Vertical (top to bottom)
    Column,
    /// Vertical (bottom to top)
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items run against the physical axis direction.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Line wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    /// All items on a single line
    #[default]
    NoWrap,
    /// Break into new lines after the first
    Wrap,
    /// Break into new lines, stacked in reverse order
    WrapReverse,
}

/// Main axis alignment for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack items at the start
    #[default]
    FlexStart,
    /// Pack items at the end
    FlexEnd,
    /// Center items
    Center,
    /// Distribute space evenly between items
    SpaceBetween,
    /// Distribute space evenly around items
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
}

/// Cross axis alignment for flex items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Align to the start
    FlexStart,
    /// Align to the end
    FlexEnd,
    /// Center items
    Center,
    /// Stretch to fill the line
    #[default]
    Stretch,
    /// Align to baseline (laid out as flex-start)
    Baseline,
}

/// Cross axis distribution of lines in a multi-line container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    /// Pack lines at the start
    FlexStart,
    /// Pack lines at the end
    FlexEnd,
    /// Center lines
    Center,
    /// Distribute space evenly between lines
    SpaceBetween,
    /// Distribute space evenly around lines
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
    /// Grow lines to fill the container
    #[default]
    Stretch,
}

/// Flex container properties.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexContainerProps {
    /// Main axis direction
    pub direction: FlexDirection,
    /// Wrapping mode
    pub wrap: FlexWrap,
    /// Main axis distribution
    pub justify_content: JustifyContent,
    /// Default cross axis alignment for items
    pub align_items: AlignItems,
    /// Cross axis distribution of lines
    pub align_content: AlignContent,
    /// Gap between items along the main axis
    pub gap: f64,
    /// Gap between lines along the cross axis
    pub row_gap: f64,
}

impl FlexContainerProps {
    /// Row container with CSS defaults.
    #[must_use]
    pub fn row() -> Self {
        Self::default()
    }

    /// Column container with CSS defaults.
    #[must_use]
    pub fn column() -> Self {
        Self::default().direction(FlexDirection::Column)
    }

    /// Set the direction.
    #[must_use]
    pub const fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the wrap mode.
    #[must_use]
    pub const fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set justify-content.
    #[must_use]
    pub const fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set align-items.
    #[must_use]
    pub const fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set align-content.
    #[must_use]
    pub const fn align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    /// Set the main axis gap.
    #[must_use]
    pub const fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the cross axis gap between lines.
    #[must_use]
    pub const fn row_gap(mut self, row_gap: f64) -> Self {
        self.row_gap = row_gap;
        self
    }
}

/// Flex item properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexItemProps {
    /// Flex grow factor
    pub grow: f64,
    /// Flex shrink factor
    pub shrink: f64,
    /// Flex basis (initial main size)
    pub basis: Dimension,
    /// Self alignment override
    pub align_self: Option<AlignItems>,
}

impl Default for FlexItemProps {
    fn default() -> Self {
        Self {
            grow: 0.0,
            shrink: 1.0,
            basis: Dimension::Auto,
            align_self: None,
        }
    }
}

impl FlexItemProps {
    /// Create a new flex item with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grow factor.
    #[must_use]
    pub const fn grow(mut self, grow: f64) -> Self {
        self.grow = grow;
        self
    }

    /// Set the shrink factor.
    #[must_use]
    pub const fn shrink(mut self, shrink: f64) -> Self {
        self.shrink = shrink;
        self
    }

    /// Set the basis.
    #[must_use]
    pub const fn basis(mut self, basis: Dimension) -> Self {
        self.basis = basis;
        self
    }

    /// Set self alignment.
    #[must_use]
    pub const fn align_self(mut self, align: AlignItems) -> Self {
        self.align_self = Some(align);
        self
    }
}
