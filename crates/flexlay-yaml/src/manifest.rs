//! Layout manifests: a viewport, engine options and a node tree.

use std::fs;
use std::path::Path;

use flexlay_core::{Node, Size};
use flexlay_layout::{validate, LayoutEngine, LayoutOptions, LayoutResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Declarative description of one layout computation, loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutManifest {
    /// Space available to the root
    pub viewport: Size,
    /// Engine options
    #[serde(default)]
    pub options: LayoutOptions,
    /// Root of the node tree
    pub root: Node,
}

impl LayoutManifest {
    /// Create a manifest with default options.
    #[must_use]
    pub fn new(viewport: Size, root: Node) -> Self {
        Self {
            viewport,
            options: LayoutOptions::default(),
            root,
        }
    }

    /// Replace the engine options.
    #[must_use]
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a manifest from JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest from a file; `.json` files are read as JSON, anything
    /// else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!("loading manifest {} (json={is_json})", path.display());
        if is_json {
            Self::from_json(&source)
        } else {
            Self::from_yaml(&source)
        }
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serialize manifest to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the viewport and the node tree.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidViewport`] for a bad viewport and
    /// [`ManifestError::Layout`] for an invalid tree.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let Size { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ManifestError::InvalidViewport { width, height });
        }
        validate(&self.root, self.viewport)?;
        Ok(())
    }

    /// Engine configured with this manifest's options.
    #[must_use]
    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine::with_options(self.options)
    }

    /// Validate, then compute the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn compute(&self) -> Result<LayoutResult, ManifestError> {
        self.validate()?;
        let result = self.engine().compute(&self.root, self.viewport);
        info!(
            "computed {} node(s) in {}x{}",
            result.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(result)
    }
}
