//! Mouse input handler.
//!
//! A click on a row selects it. A click on the row's toggle glyph only
//! toggles expansion; the click is consumed there and never also selects.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::shortcuts::Action;
use crate::tui::chrome::toolbar_hit;
use crate::tui::sidebar::hit_test;
use crate::tui::{AppState, HelpOverlayState, ScreenAreas, View};

use super::dispatch_action;

/// Handle mouse input events
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    match mouse.kind {
        MouseEventKind::ScrollUp => dispatch_action(state, Action::MoveUp),
        MouseEventKind::ScrollDown => dispatch_action(state, Action::MoveDown),
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(state, mouse.column, mouse.row),
        _ => Ok(false),
    }
}

fn handle_left_click(state: &mut AppState, column: u16, row: u16) -> Result<bool> {
    if state.help.is_some() {
        state.help = None;
        return Ok(false);
    }

    let areas = ScreenAreas::compute(state.screen);

    if row == areas.toolbar.y {
        match toolbar_hit(areas.toolbar, column) {
            Some("Ayuda") => state.help = Some(HelpOverlayState::new()),
            Some(item) => state.set_status(format!("{item}: no disponible")),
            None => {}
        }
        return Ok(false);
    }

    if state.view != View::Menu {
        return Ok(false);
    }

    let hit = hit_test(
        &state.rows(),
        areas.sidebar_inner(),
        state.sidebar_offset,
        column,
        row,
    );
    let Some(hit) = hit else {
        return Ok(false);
    };

    state.cursor = hit.index;
    if hit.on_toggle {
        let expanded = state.tree.toggle_expansion(&hit.id);
        debug!(id = %hit.id, expanded, "Toggled module by click");
        state.place_cursor(&hit.id);
    } else {
        debug!(id = %hit.id, "Selected module by click");
        let label = state
            .tree
            .rows(&state.forest)
            .get(hit.index)
            .map(|r| r.label().to_string())
            .unwrap_or_default();
        state.tree.select(hit.id);
        state.set_status(format!("Módulo: {label}"));
    }
    Ok(false)
}
