//! Grid container properties.
//!
//! Only the data model lives here. Track sizing and item placement are not
//! implemented; grid containers stack their children at the content origin.

use serde::{Deserialize, Serialize};

/// A track size specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackSize {
    /// Fixed size in pixels
    Px(f64),
    /// Flexible fraction of remaining space
    Fr(f64),
    /// Size based on content
    Auto,
    /// Minimum content size
    MinContent,
    /// Maximum content size
    MaxContent,
}

impl Default for TrackSize {
    fn default() -> Self {
        Self::Fr(1.0)
    }
}

/// Grid container properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridProps {
    /// Column track sizes
    pub columns: Vec<TrackSize>,
    /// Row track sizes
    pub rows: Vec<TrackSize>,
    /// Gap between columns
    pub column_gap: f64,
    /// Gap between rows
    pub row_gap: f64,
}

impl GridProps {
    /// Create a new empty grid template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid with the given column tracks.
    #[must_use]
    pub fn columns(cols: impl IntoIterator<Item = TrackSize>) -> Self {
        Self {
            columns: cols.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set row track sizes.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = TrackSize>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Set both gaps.
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.column_gap = gap;
        self.row_gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_size_default() {
        assert_eq!(TrackSize::default(), TrackSize::Fr(1.0));
    }

    #[test]
    fn test_grid_props_builder() {
        let grid = GridProps::columns([TrackSize::Px(100.0), TrackSize::Fr(1.0)])
            .with_rows([TrackSize::Auto])
            .with_gap(8.0);
        assert_eq!(grid.columns.len(), 2);
        assert_eq!(grid.rows, vec![TrackSize::Auto]);
        assert_eq!(grid.column_gap, 8.0);
        assert_eq!(grid.row_gap, 8.0);
    }
}
