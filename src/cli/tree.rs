//! `tree` command: print the visible rows for a given state.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_forest, print_json, CliResult};
use crate::constants::PANEL_EMPTY_TEXT;
use crate::models::{FolderColor, ModuleNode};
use crate::tree::{detail_panel, DetailPanel, ToggleGlyph, TreeController, VisibleRow};

/// Print the module tree as it would be rendered
#[derive(Debug, Clone, Args)]
pub struct TreeArgs {
    /// Forest file to use instead of the configured/built-in one
    #[arg(long, value_name = "FILE")]
    pub modules: Option<PathBuf>,

    /// Expand every module before printing
    #[arg(long, conflicts_with = "collapse_all")]
    pub expand_all: bool,

    /// Collapse every module before printing
    #[arg(long)]
    pub collapse_all: bool,

    /// Toggle a module's expansion (repeatable, applied in order)
    #[arg(long, value_name = "ID")]
    pub toggle: Vec<String>,

    /// Select a module
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of one row.
#[derive(Debug, Serialize)]
struct RowOutput<'a> {
    id: &'a str,
    label: &'a str,
    depth: usize,
    toggle: &'static str,
    color: FolderColor,
    selected: bool,
}

impl<'a> From<&VisibleRow<'a>> for RowOutput<'a> {
    fn from(row: &VisibleRow<'a>) -> Self {
        Self {
            id: &row.node.id,
            label: &row.node.label,
            depth: row.depth,
            toggle: match row.toggle {
                ToggleGlyph::None => "none",
                ToggleGlyph::Collapsed => "collapsed",
                ToggleGlyph::Expanded => "expanded",
            },
            color: row.node.color,
            selected: row.selected,
        }
    }
}

#[derive(Debug, Serialize)]
struct PanelOutput<'a> {
    id: &'a str,
    label: &'a str,
}

#[derive(Debug, Serialize)]
struct TreeOutput<'a> {
    rows: Vec<RowOutput<'a>>,
    selected: Option<&'a str>,
    panel: Option<PanelOutput<'a>>,
}

/// One text line per row: indent, glyph, color tag, label, selection mark.
#[must_use]
pub fn format_row(row: &VisibleRow<'_>) -> String {
    let glyph = match row.toggle {
        ToggleGlyph::None => " ",
        glyph => glyph.symbol(),
    };
    let mark = if row.selected { " *" } else { "" };
    format!(
        "{}{} [{}] {}{}",
        "  ".repeat(row.depth),
        glyph,
        row.node.color,
        row.node.label,
        mark
    )
}

impl TreeArgs {
    /// Applies the requested gestures to a fresh session.
    fn build_state(&self, forest: &[ModuleNode]) -> TreeController {
        let mut tree = TreeController::initialize(forest);
        if self.expand_all {
            tree.expand_all(forest);
        }
        if self.collapse_all {
            tree.collapse_all();
        }
        for id in &self.toggle {
            tree.toggle_expansion(id);
        }
        if let Some(id) = &self.select {
            tree.select(id.clone());
        }
        tree
    }

    /// Execute the tree command
    pub fn execute(&self) -> CliResult<()> {
        let forest = load_forest(self.modules.as_ref())?;
        let tree = self.build_state(&forest);
        let rows = tree.rows(&forest);
        let panel = detail_panel(&forest, &tree);

        if self.json {
            let output = TreeOutput {
                rows: rows.iter().map(RowOutput::from).collect(),
                selected: tree.selected_id(),
                panel: match panel {
                    DetailPanel::Module(node) => Some(PanelOutput {
                        id: &node.id,
                        label: &node.label,
                    }),
                    DetailPanel::Placeholder => None,
                },
            };
            return print_json(&output);
        }

        for row in &rows {
            println!("{}", format_row(row));
        }
        println!();
        match panel {
            DetailPanel::Module(node) => println!("Selected: {} ({})", node.label, node.id),
            DetailPanel::Placeholder => println!("{PANEL_EMPTY_TEXT}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> TreeArgs {
        TreeArgs {
            modules: None,
            expand_all: false,
            collapse_all: false,
            toggle: Vec::new(),
            select: None,
            json: false,
        }
    }

    fn forest() -> Vec<ModuleNode> {
        vec![ModuleNode::branch(
            "a",
            "Alpha",
            FolderColor::Yellow,
            vec![ModuleNode::leaf("a1", "Alpha One", FolderColor::Blue)],
        )]
    }

    #[test]
    fn test_format_row() {
        let forest = forest();
        let mut tree = TreeController::initialize(&forest);
        tree.select("a1");
        let rows = tree.rows(&forest);

        assert_eq!(format_row(&rows[0]), "− [yellow] Alpha");
        assert_eq!(format_row(&rows[1]), "    [blue] Alpha One *");
    }

    #[test]
    fn test_build_state_applies_gestures_in_order() {
        let forest = forest();
        let mut args = args();
        args.collapse_all = true;
        args.toggle = vec!["a".to_string(), "a".to_string(), "a".to_string()];
        args.select = Some("a1".to_string());

        let tree = args.build_state(&forest);
        assert!(tree.is_expanded("a"));
        assert!(tree.is_selected("a1"));
    }
}
