//! Detail panel for the selected module.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme};
use crate::constants::{PANEL_EMPTY_TEXT, PANEL_MODULE_TEXT};
use crate::models::ModuleNode;
use crate::tree::{detail_panel, path_to, DetailPanel};

/// Breadcrumb of labels from the root down to `node`.
#[must_use]
pub fn breadcrumb(forest: &[ModuleNode], node: &ModuleNode) -> String {
    path_to(forest, &node.id).map_or_else(
        || node.label.clone(),
        |path| {
            path.iter()
                .map(|n| n.label.as_str())
                .collect::<Vec<_>>()
                .join(" › ")
        },
    )
}

fn module_lines<'a>(forest: &[ModuleNode], node: &'a ModuleNode, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            node.label.as_str(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            breadcrumb(forest, node),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(PANEL_MODULE_TEXT, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Id: ", Style::default().fg(theme.text_secondary)),
            Span::styled(node.id.as_str(), Style::default().fg(theme.text)),
        ]),
    ];

    if node.has_children() {
        lines.push(Line::from(vec![
            Span::styled("Submódulos: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                node.children.len().to_string(),
                Style::default().fg(theme.text),
            ),
        ]));
    }

    lines
}

/// Render the detail panel
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let lines = match detail_panel(&state.forest, &state.tree) {
        DetailPanel::Module(node) => module_lines(&state.forest, node, theme),
        DetailPanel::Placeholder => vec![Line::from(Span::styled(
            PANEL_EMPTY_TEXT,
            Style::default().fg(theme.text_muted),
        ))],
    };

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(panel, area);
}
