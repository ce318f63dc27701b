//! Sizing constraints for layout nodes.

use serde::{Deserialize, Serialize};

/// Upper bound used when a node has no max size.
pub const UNBOUNDED: f64 = f64::MAX;

/// A preferred size along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    /// Size comes from context (available space or content)
    #[default]
    Auto,
    /// Fixed length in logical pixels
    Length(f64),
    /// Fraction of the available space (`0.5` is 50%)
    Percent(f64),
    /// Smallest content size; approximated by the measured content size
    MinContent,
    /// Largest content size; approximated by the measured content size
    MaxContent,
}

impl Dimension {
    /// Resolve against the available space and the measured content size.
    ///
    /// Returns `None` for [`Dimension::Auto`], which the caller resolves.
    #[must_use]
    pub fn resolve(self, available: f64, content: f64) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Length(value) => Some(value),
            Self::Percent(fraction) => Some(fraction * available),
            Self::MinContent | Self::MaxContent => Some(content),
        }
    }

    /// Check for [`Dimension::Auto`].
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; `min` wins when the bounds cross.
#[must_use]
pub fn clamp_size(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Width/height preferences of a node plus their min/max clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConstraints {
    /// Preferred width
    pub width: Dimension,
    /// Preferred height
    pub height: Dimension,
    /// Minimum width
    pub min_width: f64,
    /// Minimum height
    pub min_height: f64,
    /// Maximum width (`None` is unconstrained)
    pub max_width: Option<f64>,
    /// Maximum height (`None` is unconstrained)
    pub max_height: Option<f64>,
}

impl BoxConstraints {
    /// Unconstrained auto sizing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed width and height.
    #[must_use]
    pub fn fixed(width: f64, height: f64) -> Self {
        Self {
            width: Dimension::Length(width),
            height: Dimension::Length(height),
            ..Self::default()
        }
    }

    /// Set the preferred width.
    #[must_use]
    pub const fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Set the preferred height.
    #[must_use]
    pub const fn with_height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub const fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the minimum height.
    #[must_use]
    pub const fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub const fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Set the maximum height.
    #[must_use]
    pub const fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Maximum width, or [`UNBOUNDED`].
    #[must_use]
    pub fn max_width_or_unbounded(&self) -> f64 {
        self.max_width.unwrap_or(UNBOUNDED)
    }

    /// Maximum height, or [`UNBOUNDED`].
    #[must_use]
    pub fn max_height_or_unbounded(&self) -> f64 {
        self.max_height.unwrap_or(UNBOUNDED)
    }

    /// Clamp a width into the min/max range.
    #[must_use]
    pub fn clamp_width(&self, width: f64) -> f64 {
        clamp_size(width, self.min_width, self.max_width_or_unbounded())
    }

    /// Clamp a height into the min/max range.
    #[must_use]
    pub fn clamp_height(&self, height: f64) -> f64 {
        clamp_size(height, self.min_height, self.max_height_or_unbounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_default_is_auto() {
        assert!(Dimension::default().is_auto());
    }

    #[test]
    fn test_dimension_resolve() {
        assert_eq!(Dimension::Auto.resolve(200.0, 30.0), None);
        assert_eq!(Dimension::Length(40.0).resolve(200.0, 30.0), Some(40.0));
        assert_eq!(Dimension::Percent(0.25).resolve(200.0, 30.0), Some(50.0));
        assert_eq!(Dimension::MinContent.resolve(200.0, 30.0), Some(30.0));
        assert_eq!(Dimension::MaxContent.resolve(200.0, 30.0), Some(30.0));
    }

    #[test]
    fn test_clamp_size_in_range() {
        assert_eq!(clamp_size(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_size(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_size(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_size_crossed_bounds_prefers_min() {
        assert_eq!(clamp_size(5.0, 20.0, 10.0), 20.0);
    }

    #[test]
    fn test_box_constraints_default_unbounded() {
        let c = BoxConstraints::new();
        assert_eq!(c.max_width_or_unbounded(), UNBOUNDED);
        assert_eq!(c.max_height_or_unbounded(), UNBOUNDED);
        assert_eq!(c.min_width, 0.0);
    }

    #[test]
    fn test_box_constraints_clamp() {
        let c = BoxConstraints::new()
            .with_min_width(10.0)
            .with_max_width(50.0)
            .with_max_height(20.0);
        assert_eq!(c.clamp_width(5.0), 10.0);
        assert_eq!(c.clamp_width(80.0), 50.0);
        assert_eq!(c.clamp_height(80.0), 20.0);
    }

    #[test]
    fn test_box_constraints_fixed() {
        let c = BoxConstraints::fixed(100.0, 40.0);
        assert_eq!(c.width, Dimension::Length(100.0));
        assert_eq!(c.height, Dimension::Length(40.0));
    }

    #[test]
    fn test_dimension_serde_kebab_case() {
        let json = serde_json::to_string(&Dimension::MinContent).unwrap();
        assert_eq!(json, "\"min-content\"");
        let d: Dimension = serde_json::from_str(r#"{"percent": 0.5}"#).unwrap();
        assert_eq!(d, Dimension::Percent(0.5));
    }
}
