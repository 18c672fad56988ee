//! Action dispatch.

use anyhow::Result;
use tracing::info;

use crate::shortcuts::Action;
use crate::tasks::DashboardState;
use crate::tui::{AppState, HelpOverlayState, View};

use super::navigation;

/// Applies `action` to the state. Returns `true` to quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    if state.help.is_some() {
        return dispatch_help_action(state, action);
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        Action::Cancel => {
            state.clear_messages();
            Ok(false)
        }
        Action::ToggleHelp => {
            state.help = Some(HelpOverlayState::new());
            Ok(false)
        }
        Action::SwitchView => handle_switch_view(state),
        _ => match state.view {
            View::Menu => dispatch_menu_action(state, action),
            View::Dashboard => dispatch_dashboard_action(state, action),
        },
    }
}

fn dispatch_menu_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::MoveUp => navigation::handle_move_up(state),
        Action::MoveDown => navigation::handle_move_down(state),
        Action::JumpToFirst => navigation::handle_jump_first(state),
        Action::JumpToLast => navigation::handle_jump_last(state),
        Action::SelectRow => navigation::handle_select_row(state),
        Action::ToggleExpansion => navigation::handle_toggle_expansion(state),
        Action::ExpandOrEnter => navigation::handle_expand_or_enter(state),
        Action::CollapseOrParent => navigation::handle_collapse_or_parent(state),
        Action::ExpandAll => navigation::handle_expand_all(state),
        Action::CollapseAll => navigation::handle_collapse_all(state),
        Action::RevealSelection => navigation::handle_reveal_selection(state),
        Action::RefreshTasks
        | Action::SwitchView
        | Action::ToggleHelp
        | Action::Quit
        | Action::Cancel => Ok(false),
    }
}

fn dispatch_dashboard_action(state: &mut AppState, action: Action) -> Result<bool> {
    let len = state.dashboard.tasks().len();
    match action {
        Action::MoveUp => state.dashboard_offset = state.dashboard_offset.saturating_sub(1),
        Action::MoveDown => {
            if state.dashboard_offset + 1 < len {
                state.dashboard_offset += 1;
            }
        }
        Action::JumpToFirst => state.dashboard_offset = 0,
        Action::JumpToLast => state.dashboard_offset = len.saturating_sub(1),
        Action::RefreshTasks => {
            if !state.dashboard.is_loading() {
                state.request_refresh();
            }
        }
        _ => {}
    }
    Ok(false)
}

fn dispatch_help_action(state: &mut AppState, action: Action) -> Result<bool> {
    let Some(help) = state.help.as_mut() else {
        return Ok(false);
    };

    match action {
        Action::MoveUp => help.scroll_up(),
        Action::MoveDown => help.scroll_down(),
        Action::JumpToFirst => help.scroll_to_top(),
        Action::JumpToLast => help.scroll_to_bottom(),
        Action::ToggleHelp | Action::Cancel => state.help = None,
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        _ => {}
    }
    Ok(false)
}

/// Switch between the menu and the dashboard; the first visit loads tasks.
fn handle_switch_view(state: &mut AppState) -> Result<bool> {
    state.view = state.view.toggled();
    state.clear_messages();
    info!(view = ?state.view, "Switched view");

    if state.view == View::Dashboard && state.dashboard == DashboardState::Idle {
        state.request_refresh();
    }
    Ok(false)
}
