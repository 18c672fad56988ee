//! Shared CLI plumbing: exit codes, errors, and output helpers.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::{self, resolve_forest};
use crate::config::Config;
use crate::models::ModuleNode;

/// Process exit codes used by subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input, or a check found problems
    Validation = 1,
    /// The task endpoint could not be fetched
    Fetch = 2,
    /// The requested module does not exist
    NotFound = 3,
    /// File or configuration I/O failed
    Io = 4,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI failure: what to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or failed check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Task fetch failure.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Fetch,
            message: message.into(),
        }
    }

    /// Unknown module id.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// File or configuration I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Loads the forest for a command, honoring `--modules`.
///
/// An explicit file does not consult the configuration at all.
pub fn load_forest(modules: Option<&PathBuf>) -> CliResult<Vec<ModuleNode>> {
    let forest = match modules {
        Some(path) => catalog::load_forest(path),
        None => resolve_forest(&load_config()?, None),
    };
    forest.map_err(|e| CliError::io(format!("Failed to load modules: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").code.code(), 1);
        assert_eq!(CliError::fetch("x").code.code(), 2);
        assert_eq!(CliError::not_found("x").code.code(), 3);
        assert_eq!(CliError::io("x").code.code(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }
}
