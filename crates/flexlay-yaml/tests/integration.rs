//! Integration tests for flexlay-yaml.
//!
//! These tests verify manifest loading and layout computation end-to-end.

use std::path::PathBuf;

use flexlay_core::{NodeId, Rect, Size};
use flexlay_layout::{FlexResolution, LayoutError, LayoutResult};
use flexlay_yaml::{LayoutManifest, ManifestError};
use proptest::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rect(result: &LayoutResult, id: u64) -> Rect {
    result
        .get(NodeId(id))
        .expect("node should have a layout")
        .border_rect
}

// =============================================================================
// Fixture Manifests
// =============================================================================

#[test]
fn test_toolbar_fixture() {
    let manifest = LayoutManifest::from_path(fixture("toolbar.yaml")).unwrap();
    let result = manifest.compute().unwrap();

    assert_eq!(result.len(), 6);
    assert_eq!(rect(&result, 1), Rect::new(0.0, 0.0, 400.0, 100.0));
    assert_eq!(rect(&result, 2), Rect::new(10.0, 35.0, 50.0, 30.0));
    assert_eq!(rect(&result, 3), Rect::new(70.0, 40.0, 230.0, 20.0));
    assert_eq!(rect(&result, 4), Rect::new(310.0, 30.0, 80.0, 40.0));
    // nested action group packs to its end
    assert_eq!(rect(&result, 5), Rect::new(346.0, 30.0, 20.0, 40.0));
    assert_eq!(rect(&result, 6), Rect::new(370.0, 30.0, 20.0, 40.0));
}

#[test]
fn test_json_fixture_uses_iterative_options() {
    let manifest = LayoutManifest::from_path(fixture("column.json")).unwrap();
    assert_eq!(manifest.options.flex_resolution, FlexResolution::Iterative);

    let result = manifest.compute().unwrap();
    assert_eq!(rect(&result, 2), Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(rect(&result, 3), Rect::new(0.0, 50.0, 60.0, 250.0));
}

#[test]
fn test_viewport_override() {
    let manifest = LayoutManifest::from_path(fixture("toolbar.yaml"))
        .unwrap()
        .with_viewport(Size::new(500.0, 100.0));
    let result = manifest.compute().unwrap();
    assert_eq!(rect(&result, 3).width, 330.0);
}

#[test]
fn test_missing_file() {
    let err = LayoutManifest::from_path(fixture("does-not-exist.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io(_)));
}

#[test]
fn test_invalid_tree_reported() {
    let yaml = r"
viewport: { width: 100, height: 100 }
root:
  id: 1
  kind: { flex: {} }
  children:
    - { id: 2 }
    - { id: 2 }
";
    let manifest = LayoutManifest::from_yaml(yaml).unwrap();
    assert!(matches!(
        manifest.compute(),
        Err(ManifestError::Layout(LayoutError::DuplicateNodeId(NodeId(2))))
    ));
}

#[test]
fn test_bad_enum_value() {
    let yaml = r"
viewport: { width: 100, height: 100 }
root:
  id: 1
  kind: { flex: { direction: diagonal } }
";
    assert!(matches!(
        LayoutManifest::from_yaml(yaml),
        Err(ManifestError::Yaml(_))
    ));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_yaml_roundtrip_preserves_layout(
        widths in prop::collection::vec(0u32..100, 0..6),
        viewport_w in 0u32..500,
        viewport_h in 0u32..500,
    ) {
        let root = flexlay_core::Node::flex(1, flexlay_core::FlexContainerProps::row())
            .with_children(
                widths
                    .iter()
                    .enumerate()
                    .map(|(i, &w)| flexlay_core::Node::leaf(i as u64 + 2, Size::new(f64::from(w), 10.0))),
            );
        let manifest = LayoutManifest::new(Size::new(f64::from(viewport_w), f64::from(viewport_h)), root);
        let reparsed = LayoutManifest::from_yaml(&manifest.to_yaml().unwrap()).unwrap();
        prop_assert_eq!(reparsed.compute().unwrap(), manifest.compute().unwrap());
    }
}
