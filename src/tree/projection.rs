//! Render projection: forest + controller state -> visible rows.
//!
//! The projection is a pure function of its inputs. It holds no state of its
//! own, so the same forest and state always produce the same rows.

use crate::models::{FolderColor, ModuleNode};

use super::TreeController;

/// Toggle affordance shown in front of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGlyph {
    /// Leaf module, no affordance
    None,
    /// Has children, currently collapsed
    Collapsed,
    /// Has children, currently expanded
    Expanded,
}

impl ToggleGlyph {
    /// Glyph text.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Collapsed => "+",
            Self::Expanded => "−",
        }
    }
}

/// One visible row of the module tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// The module rendered by this row
    pub node: &'a ModuleNode,
    /// Nesting level, roots are 0
    pub depth: usize,
    /// Toggle affordance
    pub toggle: ToggleGlyph,
    /// Whether this row's module is the selected one
    pub selected: bool,
}

impl VisibleRow<'_> {
    /// Module id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.node.id
    }

    /// Module label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.node.label
    }

    /// Module color tag.
    #[must_use]
    pub const fn color(&self) -> FolderColor {
        self.node.color
    }
}

/// Projects the visible rows in pre-order.
///
/// Children follow their parent only when the parent is expanded, so an
/// entire collapsed subtree is suppressed.
#[must_use]
pub fn project_rows<'a>(forest: &'a [ModuleNode], tree: &TreeController) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    for root in forest {
        push_visible(&mut rows, root, 0, tree);
    }
    rows
}

fn push_visible<'a>(
    rows: &mut Vec<VisibleRow<'a>>,
    node: &'a ModuleNode,
    depth: usize,
    tree: &TreeController,
) {
    let expanded = tree.is_expanded(&node.id);
    let toggle = match (node.has_children(), expanded) {
        (false, _) => ToggleGlyph::None,
        (true, false) => ToggleGlyph::Collapsed,
        (true, true) => ToggleGlyph::Expanded,
    };

    rows.push(VisibleRow {
        node,
        depth,
        toggle,
        selected: tree.is_selected(&node.id),
    });

    if toggle == ToggleGlyph::Expanded {
        for child in &node.children {
            push_visible(rows, child, depth + 1, tree);
        }
    }
}

/// Content of the detail panel next to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPanel<'a> {
    /// Nothing selected, or the selected id matches no module
    Placeholder,
    /// The selected module
    Module(&'a ModuleNode),
}

/// Projects the detail panel for the current selection.
#[must_use]
pub fn detail_panel<'a>(forest: &'a [ModuleNode], tree: &TreeController) -> DetailPanel<'a> {
    match tree.selected_node(forest) {
        Some(node) => DetailPanel::Module(node),
        None => DetailPanel::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<ModuleNode> {
        vec![
            ModuleNode::branch(
                "a",
                "A",
                FolderColor::Yellow,
                vec![ModuleNode::branch(
                    "a1",
                    "A1",
                    FolderColor::Yellow,
                    vec![ModuleNode::leaf("a1x", "A1X", FolderColor::Yellow)],
                )],
            ),
            ModuleNode::leaf("b", "B", FolderColor::Pink),
        ]
    }

    fn ids<'a>(rows: &'a [VisibleRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(VisibleRow::id).collect()
    }

    #[test]
    fn test_initial_projection_shows_first_level() {
        let forest = forest();
        let tree = TreeController::initialize(&forest);
        let rows = project_rows(&forest, &tree);

        assert_eq!(ids(&rows), vec!["a", "a1", "b"]);
        assert_eq!(rows[0].toggle, ToggleGlyph::Expanded);
        assert_eq!(rows[1].toggle, ToggleGlyph::Collapsed);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[2].toggle, ToggleGlyph::None);
    }

    #[test]
    fn test_collapsed_root_hides_whole_subtree() {
        let forest = forest();
        let mut tree = TreeController::initialize(&forest);
        // a1 expanded but its ancestor collapsed: nothing below a may show
        tree.toggle_expansion("a1");
        tree.toggle_expansion("a");
        let rows = project_rows(&forest, &tree);
        assert_eq!(ids(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_leaf_in_expansion_set_shows_no_glyph() {
        let forest = forest();
        let mut tree = TreeController::initialize(&forest);
        tree.toggle_expansion("b");
        let rows = project_rows(&forest, &tree);
        assert_eq!(rows.last().unwrap().toggle, ToggleGlyph::None);
    }

    #[test]
    fn test_selected_flag() {
        let forest = forest();
        let mut tree = TreeController::initialize(&forest);
        tree.select("a1");
        let rows = project_rows(&forest, &tree);
        let selected: Vec<&str> = rows.iter().filter(|r| r.selected).map(VisibleRow::id).collect();
        assert_eq!(selected, vec!["a1"]);
    }

    #[test]
    fn test_glyph_symbols() {
        assert_eq!(ToggleGlyph::None.symbol(), "");
        assert_eq!(ToggleGlyph::Collapsed.symbol(), "+");
        assert_eq!(ToggleGlyph::Expanded.symbol(), "−");
    }

    #[test]
    fn test_detail_panel() {
        let forest = forest();
        let mut tree = TreeController::initialize(&forest);
        assert_eq!(detail_panel(&forest, &tree), DetailPanel::Placeholder);

        // Collapsed modules remain selectable by id
        tree.select("a1x");
        match detail_panel(&forest, &tree) {
            DetailPanel::Module(node) => assert_eq!(node.label, "A1X"),
            DetailPanel::Placeholder => panic!("expected module panel"),
        }

        tree.select("nonexistent");
        assert_eq!(detail_panel(&forest, &tree), DetailPanel::Placeholder);
    }
}
