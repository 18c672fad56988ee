//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::Action;

/// Actions advertised in the hints line, in display order.
const HINT_ACTIONS: [Action; 6] = [
    Action::SelectRow,
    Action::ToggleExpansion,
    Action::RefreshTasks,
    Action::SwitchView,
    Action::ToggleHelp,
    Action::Quit,
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.as_str())
        } else {
            Self::hints_line(state, theme)
        };

        let status = Paragraph::new(line)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the current context
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let entries = state.shortcuts.help_entries(state.context());

        let mut spans: Vec<Span<'static>> = Vec::new();
        for action in HINT_ACTIONS {
            let Some((keys, _)) = entries.iter().find(|(_, a)| *a == action) else {
                continue;
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                keys.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                action.description(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
