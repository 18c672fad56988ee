//! `check` command: forest diagnostics.

use clap::Args;
use std::path::PathBuf;

use crate::catalog::ForestStats;
use crate::cli::common::{load_forest, print_json, CliError, CliResult};

/// Report forest statistics and duplicate ids
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Forest file to use instead of the configured/built-in one
    #[arg(long, value_name = "FILE")]
    pub modules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Statistics are always printed; duplicate ids then fail the command.
    pub fn execute(&self) -> CliResult<()> {
        let forest = load_forest(self.modules.as_ref())?;
        let stats = ForestStats::collect(&forest);

        if self.json {
            print_json(&stats)?;
        } else {
            println!("Modules:   {}", stats.modules);
            println!("Roots:     {}", stats.roots);
            println!("Leaves:    {}", stats.leaves);
            println!("Max depth: {}", stats.max_depth);
            if stats.duplicate_ids.is_empty() {
                println!("Duplicate ids: none");
            } else {
                println!("Duplicate ids:");
                for id in &stats.duplicate_ids {
                    println!("  - {id}");
                }
            }
        }

        if stats.duplicate_ids.is_empty() {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Found {} duplicate module id(s): {}",
                stats.duplicate_ids.len(),
                stats.duplicate_ids.join(", ")
            )))
        }
    }
}
