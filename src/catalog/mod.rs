//! Module forest sources: the built-in tree and forest files on disk.
//!
//! Forest files are parsed by extension:
//!
//! - `.json`  - a bare array of modules, or `{ "modules": [...] }`
//! - `.json5` - same shapes as JSON, with comments and trailing commas
//! - `.toml`  - `[[modules]]` tables, children as `[[modules.children]]`
//! - `.yaml` / `.yml` - a bare sequence or a `modules:` key

mod builtin;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::ModuleNode;
use crate::tree::preorder;

pub use builtin::builtin_forest;

/// Accepted top-level shapes of a forest document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ForestDocument {
    Bare(Vec<ModuleNode>),
    Wrapped(ForestFile),
}

/// Wrapped forest document, the only shape TOML can express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestFile {
    /// Top-level modules
    pub modules: Vec<ModuleNode>,
}

impl From<ForestDocument> for Vec<ModuleNode> {
    fn from(doc: ForestDocument) -> Self {
        match doc {
            ForestDocument::Bare(modules) | ForestDocument::Wrapped(ForestFile { modules }) => {
                modules
            }
        }
    }
}

/// Supported forest file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestFormat {
    /// Plain JSON
    Json,
    /// JSON5
    Json5,
    /// TOML
    Toml,
    /// YAML
    Yaml,
}

impl ForestFormat {
    /// Picks the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "json5" => Some(Self::Json5),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses forest text in the given format.
pub fn parse_forest(content: &str, format: ForestFormat) -> Result<Vec<ModuleNode>> {
    let doc: ForestDocument = match format {
        ForestFormat::Json => serde_json::from_str(content).context("Invalid JSON forest")?,
        ForestFormat::Json5 => json5::from_str(content).context("Invalid JSON5 forest")?,
        ForestFormat::Toml => toml::from_str(content).context("Invalid TOML forest")?,
        ForestFormat::Yaml => serde_yml::from_str(content).context("Invalid YAML forest")?,
    };
    Ok(doc.into())
}

/// Loads a forest file, picking the parser from its extension.
pub fn load_forest(path: &Path) -> Result<Vec<ModuleNode>> {
    let format = ForestFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported forest file extension: {} (expected .json, .json5, .toml, .yaml or .yml)",
            path.display()
        )
    })?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read forest file: {}", path.display()))?;

    let forest = parse_forest(&content, format)
        .with_context(|| format!("Failed to parse forest file: {}", path.display()))?;

    let stats = ForestStats::collect(&forest);
    info!(
        path = %path.display(),
        modules = stats.modules,
        roots = stats.roots,
        "Loaded module forest"
    );
    if !stats.duplicate_ids.is_empty() {
        warn!(
            duplicates = ?stats.duplicate_ids,
            "Forest contains duplicate module ids; lookups return the first match"
        );
    }

    Ok(forest)
}

/// Picks the forest for this run.
///
/// Priority: explicit path, then `paths.modules_file` from the config, then
/// the built-in tree.
pub fn resolve_forest(config: &Config, explicit: Option<&Path>) -> Result<Vec<ModuleNode>> {
    if let Some(path) = explicit.or(config.paths.modules_file.as_deref()) {
        return load_forest(path);
    }
    Ok(builtin_forest())
}

/// Shape statistics of a forest, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForestStats {
    /// Total number of modules
    pub modules: usize,
    /// Number of top-level modules
    pub roots: usize,
    /// Number of modules without children
    pub leaves: usize,
    /// Deepest nesting level (roots are 0)
    pub max_depth: usize,
    /// Ids that occur more than once, in first-seen order
    pub duplicate_ids: Vec<String>,
}

impl ForestStats {
    /// Collects statistics over the whole forest.
    #[must_use]
    pub fn collect(forest: &[ModuleNode]) -> Self {
        let mut stats = Self {
            roots: forest.len(),
            ..Self::default()
        };
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for (depth, node) in preorder(forest) {
            stats.modules += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if !node.has_children() {
                stats.leaves += 1;
            }
            if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
                stats.duplicate_ids.push(node.id.clone());
            }
        }

        stats
    }
}
