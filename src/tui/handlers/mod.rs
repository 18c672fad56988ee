//! Input handler modules for the TUI.

pub mod actions;
pub mod mouse;
pub mod navigation;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::tui::AppState;

pub use actions::dispatch_action;
pub use mouse::handle_mouse_event;

/// Handle keyboard input events
///
/// Returns `true` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }

    match state.shortcuts.lookup(state.context(), key) {
        Some(action) => {
            debug!(action = action.id(), context = state.context(), "Dispatching action");
            dispatch_action(state, action)
        }
        // No action mapped - ignore key
        None => Ok(false),
    }
}
