//! flexlay CLI - compute and check layout manifests.

#![allow(
    clippy::needless_pass_by_value,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use flexlay_core::{Node, Size};
use flexlay_layout::{FlexResolution, LayoutResult};
use flexlay_yaml::{LayoutManifest, ManifestError};
use log::debug;

#[derive(Parser)]
#[command(name = "flexlay")]
#[command(about = "Flexbox layout engine CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the layout of a manifest
    Layout {
        /// Path to manifest file (YAML, or JSON with a .json extension)
        manifest: PathBuf,

        /// Override the viewport width
        #[arg(long)]
        width: Option<f64>,

        /// Override the viewport height
        #[arg(long)]
        height: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Use iterative flexible length resolution
        #[arg(long)]
        iterative: bool,
    },

    /// Check manifest validity
    Check {
        /// Path to manifest file
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented tree, one node per line
    Text,
    /// JSON object keyed by node id
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Layout {
            manifest,
            width,
            height,
            format,
            iterative,
        } => run_layout(&manifest, width, height, format, iterative),
        Commands::Check { manifest } => check_manifest(&manifest),
    };

    match outcome {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Load a manifest and apply command-line overrides.
fn load_manifest(
    path: &Path,
    width: Option<f64>,
    height: Option<f64>,
    iterative: bool,
) -> Result<LayoutManifest, ManifestError> {
    let mut manifest = LayoutManifest::from_path(path)?;
    let viewport = Size::new(
        width.unwrap_or(manifest.viewport.width),
        height.unwrap_or(manifest.viewport.height),
    );
    manifest = manifest.with_viewport(viewport);
    if iterative {
        manifest.options = manifest.options.flex_resolution(FlexResolution::Iterative);
    }
    debug!(
        "manifest {} viewport={}x{} options={:?}",
        path.display(),
        viewport.width,
        viewport.height,
        manifest.options
    );
    Ok(manifest)
}

fn run_layout(
    path: &Path,
    width: Option<f64>,
    height: Option<f64>,
    format: OutputFormat,
    iterative: bool,
) -> Result<String, ManifestError> {
    let manifest = load_manifest(path, width, height, iterative)?;
    let result = manifest.compute()?;
    match format {
        OutputFormat::Text => Ok(render_text(&manifest.root, &result)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&result)?)),
    }
}

fn check_manifest(path: &Path) -> Result<String, ManifestError> {
    let manifest = LayoutManifest::from_path(path)?;
    manifest.validate()?;
    Ok(format!(
        "Manifest valid: {}\n  Viewport: {}x{}\n  Nodes: {}\n  Flex resolution: {:?}\n",
        path.display(),
        manifest.viewport.width,
        manifest.viewport.height,
        manifest.root.descendant_count(),
        manifest.options.flex_resolution
    ))
}

/// Render the layout as an indented tree in pre-order.
fn render_text(root: &Node, result: &LayoutResult) -> String {
    render_node(root, result, 0)
}

fn render_node(node: &Node, result: &LayoutResult, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let line = match result.get(node.id) {
        Some(layout) => {
            let r = layout.border_rect;
            format!(
                "{indent}{} x={} y={} w={} h={}\n",
                node.id, r.x, r.y, r.width, r.height
            )
        }
        None => format!("{indent}{} (not laid out)\n", node.id),
    };
    std::iter::once(line)
        .chain(
            node.children
                .iter()
                .map(|child| render_node(child, result, depth + 1)),
        )
        .collect()
}
