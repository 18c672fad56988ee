//! Module Navigator Library
//!
//! Core of the module navigation shell: the module forest and its catalog,
//! the expansion/selection controller with its render projection, the task
//! dashboard client, and the terminal UI and CLI built on top of them.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tasks;
pub mod tree;
pub mod tui;
