//! Expansion and selection state over a static module forest.
//!
//! The forest is owned by the caller and only borrowed here. `TreeController`
//! owns the expansion set and the selected id and nothing else, so a fresh
//! controller is a fresh session.
//!
//! None of the operations fail. Ids are never checked against the forest:
//! toggling or selecting an unknown id is accepted, and lookups simply report
//! "not found". This keeps the navigation shell working when modules are
//! renamed or removed from the forest.

pub mod projection;
pub mod search;

use std::collections::HashSet;

use crate::models::ModuleNode;

pub use projection::{detail_panel, project_rows, DetailPanel, ToggleGlyph, VisibleRow};
pub use search::{find_node, path_to, preorder, PreOrder};

/// Set of module ids whose children are eligible for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    ids: HashSet<String>,
}

impl ExpansionState {
    /// Expansion set holding exactly the ids of the top-level modules.
    #[must_use]
    pub fn from_roots(forest: &[ModuleNode]) -> Self {
        Self {
            ids: forest.iter().map(|root| root.id.clone()).collect(),
        }
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id` and returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Adds `id`; returns true if it was not present.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Removes `id`; returns true if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Number of expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates expanded ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn clear(&mut self) {
        self.ids.clear();
    }
}

/// At most one selected module id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    id: Option<String>,
}

impl SelectionState {
    /// Selected id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether `id` is the selected one.
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Owner of expansion and selection state for one navigation session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeController {
    expansion: ExpansionState,
    selection: SelectionState,
}

impl TreeController {
    /// Starts a session: top-level modules expanded, nothing selected.
    ///
    /// An empty forest gives an empty expansion set.
    #[must_use]
    pub fn initialize(forest: &[ModuleNode]) -> Self {
        Self {
            expansion: ExpansionState::from_roots(forest),
            selection: SelectionState::default(),
        }
    }

    /// Flips the expansion of `id` and returns whether it is now expanded.
    ///
    /// Selection is left untouched.
    pub fn toggle_expansion(&mut self, id: &str) -> bool {
        self.expansion.toggle(id)
    }

    /// Makes `id` the selected module, replacing any previous selection.
    ///
    /// Expansion is left untouched.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selection.id = Some(id.into());
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.id = None;
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.contains(id)
    }

    /// Whether `id` is the selected module.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is(id)
    }

    /// Selected id, if any (it may match no module).
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.id()
    }

    /// Current expansion set.
    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Looks up the selected module anywhere in the forest.
    #[must_use]
    pub fn selected_node<'a>(&self, forest: &'a [ModuleNode]) -> Option<&'a ModuleNode> {
        find_node(forest, self.selected_id())
    }

    /// Expands every module that has children.
    pub fn expand_all(&mut self, forest: &[ModuleNode]) {
        for (_, node) in preorder(forest) {
            if node.has_children() {
                self.expansion.insert(&node.id);
            }
        }
    }

    /// Collapses everything, top-level modules included.
    pub fn collapse_all(&mut self) {
        self.expansion.clear();
    }

    /// Expands all ancestors of `id` so its row becomes visible.
    ///
    /// Returns false (and changes nothing) when `id` is not in the forest.
    pub fn reveal(&mut self, forest: &[ModuleNode], id: &str) -> bool {
        let Some(path) = path_to(forest, id) else {
            return false;
        };
        if let Some((_, ancestors)) = path.split_last() {
            for ancestor in ancestors {
                self.expansion.insert(&ancestor.id);
            }
        }
        true
    }

    /// Visible rows for this state.
    #[must_use]
    pub fn rows<'a>(&self, forest: &'a [ModuleNode]) -> Vec<VisibleRow<'a>> {
        project_rows(forest, self)
    }
}
