//! Error types for manifest loading.

use flexlay_layout::LayoutError;
use thiserror::Error;

/// Errors that can occur while loading, validating or computing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a manifest file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The node tree failed validation.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Viewport is negative, NaN or infinite.
    #[error("Invalid viewport: {width}x{height} (must be finite and non-negative)")]
    InvalidViewport { width: f64, height: f64 },
}
