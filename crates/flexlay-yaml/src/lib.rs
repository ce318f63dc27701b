//! YAML/JSON layout manifests for flexlay.
//!
//! A manifest bundles everything one layout computation needs: the viewport,
//! engine options and the node tree.
//!
//! ```
//! use flexlay_yaml::LayoutManifest;
//!
//! let manifest = LayoutManifest::from_yaml(
//!     "viewport: { width: 200, height: 100 }\nroot: { id: 1 }\n",
//! )
//! .unwrap();
//! let result = manifest.compute().unwrap();
//! assert_eq!(result.len(), 1);
//! ```

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::LayoutManifest;
