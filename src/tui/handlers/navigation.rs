//! Cursor and tree action handlers for the module menu.

use anyhow::Result;
use tracing::debug;

use crate::tree::path_to;
use crate::tui::AppState;

/// Handle move up action
pub fn handle_move_up(state: &mut AppState) -> Result<bool> {
    state.cursor = state.cursor.saturating_sub(1);
    Ok(false)
}

/// Handle move down action
pub fn handle_move_down(state: &mut AppState) -> Result<bool> {
    let len = state.rows().len();
    if state.cursor + 1 < len {
        state.cursor += 1;
    }
    Ok(false)
}

/// Handle jump to first row
pub fn handle_jump_first(state: &mut AppState) -> Result<bool> {
    state.cursor = 0;
    Ok(false)
}

/// Handle jump to last row
pub fn handle_jump_last(state: &mut AppState) -> Result<bool> {
    state.cursor = state.rows().len().saturating_sub(1);
    Ok(false)
}

/// Select the module under the cursor. Expansion is untouched.
pub fn handle_select_row(state: &mut AppState) -> Result<bool> {
    let Some((id, label)) = state
        .rows()
        .get(state.cursor)
        .map(|row| (row.id().to_string(), row.label().to_string()))
    else {
        return Ok(false);
    };

    debug!(id = %id, "Selecting module");
    state.tree.select(id);
    state.set_status(format!("Módulo: {label}"));
    Ok(false)
}

/// Toggle expansion of the row under the cursor. Selection is untouched.
///
/// Rows without children have no toggle and are left alone.
pub fn handle_toggle_expansion(state: &mut AppState) -> Result<bool> {
    let Some(id) = state
        .rows()
        .get(state.cursor)
        .filter(|row| row.node.has_children())
        .map(|row| row.id().to_string())
    else {
        return Ok(false);
    };

    let expanded = state.tree.toggle_expansion(&id);
    debug!(id = %id, expanded, "Toggled module");
    state.place_cursor(&id);
    Ok(false)
}

/// Expand the row under the cursor, or step into its first child.
pub fn handle_expand_or_enter(state: &mut AppState) -> Result<bool> {
    let Some((id, has_children)) = state
        .rows()
        .get(state.cursor)
        .map(|row| (row.id().to_string(), row.node.has_children()))
    else {
        return Ok(false);
    };

    if !has_children {
        return Ok(false);
    }
    if state.tree.is_expanded(&id) {
        state.cursor += 1;
    } else {
        state.tree.toggle_expansion(&id);
    }
    Ok(false)
}

/// Collapse the row under the cursor, or step to its parent.
pub fn handle_collapse_or_parent(state: &mut AppState) -> Result<bool> {
    let Some((id, has_children)) = state
        .rows()
        .get(state.cursor)
        .map(|row| (row.id().to_string(), row.node.has_children()))
    else {
        return Ok(false);
    };

    if has_children && state.tree.is_expanded(&id) {
        state.tree.toggle_expansion(&id);
        return Ok(false);
    }

    let parent = path_to(&state.forest, &id).and_then(|path| {
        let len = path.len();
        (len >= 2).then(|| path[len - 2].id.clone())
    });
    if let Some(parent) = parent {
        state.place_cursor(&parent);
    }
    Ok(false)
}

/// Expand every module with children.
pub fn handle_expand_all(state: &mut AppState) -> Result<bool> {
    let current = state.cursor_id();
    state.tree.expand_all(&state.forest);
    if let Some(id) = current {
        state.place_cursor(&id);
    }
    state.set_status("Todos los módulos expandidos");
    Ok(false)
}

/// Collapse every module, top level included.
pub fn handle_collapse_all(state: &mut AppState) -> Result<bool> {
    let current = state.cursor_id();
    state.tree.collapse_all();
    if let Some(id) = current {
        state.place_cursor(&id);
    }
    state.set_status("Todos los módulos contraídos");
    Ok(false)
}

/// Expand the ancestors of the selected module and move the cursor to it.
pub fn handle_reveal_selection(state: &mut AppState) -> Result<bool> {
    let Some(id) = state.tree.selected_id().map(str::to_string) else {
        state.set_status("No hay módulo seleccionado");
        return Ok(false);
    };

    if state.tree.reveal(&state.forest, &id) {
        state.place_cursor(&id);
    } else {
        state.set_error(format!("El módulo '{id}' no existe"));
    }
    Ok(false)
}
