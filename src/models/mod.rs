//! Data models for the module forest and dashboard tasks.
//!
//! Models are plain data, independent of UI and business logic.

pub mod module_node;
pub mod task;

pub use module_node::{FolderColor, ModuleNode};
pub use task::Task;
