//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How flexible lengths are resolved within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexResolution {
    /// One grow or shrink pass from the hypothetical sizes; items clamped by
    /// min/max do not hand their excess back to the rest of the line.
    #[default]
    SinglePass,
    /// CSS "resolve flexible lengths": freeze items that hit a clamp and
    /// redistribute the remaining free space until nothing violates.
    Iterative,
}

/// Options for a [`crate::LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Flexible length strategy
    pub flex_resolution: FlexResolution,
}

impl LayoutOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flexible length strategy.
    #[must_use]
    pub const fn flex_resolution(mut self, resolution: FlexResolution) -> Self {
        self.flex_resolution = resolution;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_pass() {
        assert_eq!(LayoutOptions::default().flex_resolution, FlexResolution::SinglePass);
    }

    #[test]
    fn test_builder() {
        let options = LayoutOptions::new().flex_resolution(FlexResolution::Iterative);
        assert_eq!(options.flex_resolution, FlexResolution::Iterative);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: LayoutOptions =
            serde_json::from_str(r#"{"flex_resolution": "iterative"}"#).unwrap();
        assert_eq!(options.flex_resolution, FlexResolution::Iterative);
        let empty: LayoutOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LayoutOptions::default());
    }
}
