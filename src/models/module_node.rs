//! Business-module tree nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Folder color tag for a module.
///
/// The set is closed; the color only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderColor {
    /// Operational records
    Yellow,
    /// Reports
    Blue,
    /// Experimental and legacy modules
    Pink,
}

impl FolderColor {
    /// Lowercase tag as used in forest files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for FolderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the module forest.
///
/// Nodes own their children, so a forest is always finite and acyclic.
/// A missing `children` field in a forest file is the same as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleNode {
    /// Identifier, unique across the whole forest
    pub id: String,
    /// Display label
    pub label: String,
    /// Folder color tag
    pub color: FolderColor,
    /// Child modules in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ModuleNode>,
}

impl ModuleNode {
    /// Creates a leaf module.
    #[must_use]
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, color: FolderColor) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
            children: Vec::new(),
        }
    }

    /// Creates a module with children.
    #[must_use]
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        color: FolderColor,
        children: Vec<ModuleNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
            children,
        }
    }

    /// Whether this module has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
