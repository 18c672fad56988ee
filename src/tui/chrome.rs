//! Window chrome: menubar, toolbar and the company title bar.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme, View};
use crate::constants::{MENUBAR_ITEMS, TOOLBAR_ITEMS};

/// Gap between toolbar buttons.
const TOOLBAR_GAP: u16 = 1;

/// Render the menubar line
pub fn render_menubar(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = Vec::with_capacity(MENUBAR_ITEMS.len() * 2);
    for item in MENUBAR_ITEMS {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item, Style::default().fg(theme.text)));
        spans.push(Span::raw(" "));
    }

    let menubar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    f.render_widget(menubar, area);
}

/// Render the toolbar line with its buttons
pub fn render_toolbar(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (i, item) in TOOLBAR_ITEMS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(TOOLBAR_GAP as usize)));
        }
        spans.push(Span::styled(
            format!("[{item}]"),
            Style::default().fg(theme.primary),
        ));
    }

    let toolbar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    f.render_widget(toolbar, area);
}

/// Toolbar button under column `x`, if any.
#[must_use]
pub fn toolbar_hit(area: Rect, x: u16) -> Option<&'static str> {
    let mut start = area.x + 1;
    for item in TOOLBAR_ITEMS {
        let width = item.chars().count() as u16 + 2;
        if x >= start && x < start + width {
            return Some(item);
        }
        start += width + TOOLBAR_GAP;
    }
    None
}

/// Render the title bar with the company name and the active view
pub fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let view_label = match state.view {
        View::Menu => "Menú",
        View::Dashboard => "Tareas",
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            state.config.ui.company_name.as_str(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  {view_label}"), Style::default().fg(theme.text_muted)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(title, area);
}
