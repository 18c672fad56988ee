//! Sidebar widget rendering the module tree.
//!
//! Each row is laid out as `<indent><toggle><icon> <label>`, where the indent
//! is two columns per depth level and the toggle cell is two columns wide.
//! Mouse hit testing uses the same layout.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::constants::SIDEBAR_TITLE;
use crate::tree::{ToggleGlyph, VisibleRow};

/// Columns per depth level.
const INDENT_WIDTH: u16 = 2;
/// Columns of the toggle cell.
const TOGGLE_WIDTH: u16 = 2;
/// Folder icon.
const FOLDER_ICON: &str = "■";

/// What a click in the sidebar landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarHit {
    /// Index into the visible rows
    pub index: usize,
    /// Module id of the row
    pub id: String,
    /// Whether the click hit the toggle glyph of an expandable row
    pub on_toggle: bool,
}

/// Maps a click at (`column`, `row`) to a visible row.
///
/// `inner` is the sidebar area inside its border and `offset` the first
/// visible row index.
#[must_use]
pub fn hit_test(
    rows: &[VisibleRow<'_>],
    inner: Rect,
    offset: usize,
    column: u16,
    row: u16,
) -> Option<SidebarHit> {
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let index = offset + (row - inner.y) as usize;
    let visible = rows.get(index)?;

    let toggle_start = inner.x + visible.depth as u16 * INDENT_WIDTH;
    let on_toggle = visible.toggle != ToggleGlyph::None
        && column >= toggle_start
        && column < toggle_start + TOGGLE_WIDTH;

    Some(SidebarHit {
        index,
        id: visible.id().to_string(),
        on_toggle,
    })
}

fn row_line<'a>(row: &VisibleRow<'a>, is_cursor: bool, theme: &Theme) -> Line<'a> {
    let indent = " ".repeat(row.depth * INDENT_WIDTH as usize);
    let toggle = match row.toggle {
        ToggleGlyph::None => "  ".to_string(),
        glyph => format!("{} ", glyph.symbol()),
    };

    let mut label_style = Style::default().fg(theme.text);
    if row.selected {
        label_style = label_style
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
    }

    let mut line = Line::from(vec![
        Span::raw(indent),
        Span::styled(toggle, Style::default().fg(theme.text_secondary)),
        Span::styled(FOLDER_ICON, Style::default().fg(theme.folder(row.color()))),
        Span::raw(" "),
        Span::styled(row.node.label.as_str(), label_style),
    ]);

    if is_cursor {
        line = line.style(Style::default().bg(theme.highlight_bg));
    }
    line
}

/// Render the module tree
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let rows = state.rows();
    let height = Block::default().borders(Borders::ALL).inner(area).height as usize;

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(state.sidebar_offset)
        .take(height)
        .map(|(i, row)| row_line(row, i == state.cursor, theme))
        .collect();

    let sidebar = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {SIDEBAR_TITLE} "))
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(sidebar, area);
}
