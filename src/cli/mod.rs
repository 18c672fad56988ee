//! CLI command handlers for Module Navigator.
//!
//! Headless, scriptable access to the module tree, the forest diagnostics
//! and the task endpoint, for automation and testing.

pub mod check;
pub mod common;
pub mod config;
pub mod find;
pub mod tasks;
pub mod tree;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use find::FindArgs;
pub use tasks::TasksArgs;
pub use tree::{format_row, TreeArgs};
