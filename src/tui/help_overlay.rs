//! Help overlay listing keyboard shortcuts per view.
//!
//! Content is generated from the shortcut registry, so the overlay always
//! matches the active bindings.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::{centered_rect, Theme};
use crate::constants::APP_NAME;
use crate::shortcuts::{ShortcutRegistry, CONTEXT_DASHBOARD, CONTEXT_MENU};

/// Width of the key column.
const KEY_COLUMN: usize = 18;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::content(&ShortcutRegistry::new(), &Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    fn section(title: &str, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ]
    }

    fn entry(keys: &str, description: &str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{keys:<KEY_COLUMN$}"),
                Style::default().fg(theme.success),
            ),
            Span::styled(description.to_string(), Style::default().fg(theme.text)),
        ])
    }

    /// Help content: one section per view plus mouse gestures.
    fn content(registry: &ShortcutRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("{APP_NAME} - Help"),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))];

        for (title, context) in [("MENÚ", CONTEXT_MENU), ("TAREAS", CONTEXT_DASHBOARD)] {
            lines.extend(Self::section(title, theme));
            for (keys, action) in registry.help_entries(context) {
                lines.push(Self::entry(&keys, action.description(), theme));
            }
        }

        lines.extend(Self::section("MOUSE", theme));
        lines.push(Self::entry("Click row", "Select module", theme));
        lines.push(Self::entry("Click +/−", "Expand/collapse without selecting", theme));
        lines.push(Self::entry("Wheel", "Move cursor", theme));

        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &ShortcutRegistry, theme: &Theme) {
        let modal_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        // Create layout for content area and scrollbar
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(Self::content(registry, theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}
