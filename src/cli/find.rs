//! `find` command: look up one module by id.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_forest, print_json, CliError, CliResult};
use crate::models::{FolderColor, ModuleNode};
use crate::tree::path_to;

/// Find a module by id and print its breadcrumb
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Module id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Forest file to use instead of the configured/built-in one
    #[arg(long, value_name = "FILE")]
    pub modules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CrumbOutput<'a> {
    id: &'a str,
    label: &'a str,
}

#[derive(Debug, Serialize)]
struct FindOutput<'a> {
    id: &'a str,
    label: &'a str,
    color: FolderColor,
    depth: usize,
    children: Vec<CrumbOutput<'a>>,
    path: Vec<CrumbOutput<'a>>,
}

fn crumb(node: &ModuleNode) -> CrumbOutput<'_> {
    CrumbOutput {
        id: &node.id,
        label: &node.label,
    }
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> CliResult<()> {
        let forest = load_forest(self.modules.as_ref())?;

        let path = path_to(&forest, &self.id)
            .ok_or_else(|| CliError::not_found(format!("Module '{}' not found", self.id)))?;
        let Some(node) = path.last().copied() else {
            return Err(CliError::not_found(format!("Module '{}' not found", self.id)));
        };

        if self.json {
            let output = FindOutput {
                id: &node.id,
                label: &node.label,
                color: node.color,
                depth: path.len() - 1,
                children: node.children.iter().map(crumb).collect(),
                path: path.iter().copied().map(crumb).collect(),
            };
            return print_json(&output);
        }

        let breadcrumb: Vec<&str> = path.iter().map(|n| n.label.as_str()).collect();
        println!("{} ({})", node.label, node.id);
        println!("  Path: {}", breadcrumb.join(" › "));
        println!("  Color: {}", node.color);
        if node.has_children() {
            println!("  Children:");
            for child in &node.children {
                println!("    - {} ({})", child.label, child.id);
            }
        }

        Ok(())
    }
}
