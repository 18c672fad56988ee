//! Task dashboard view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{AppState, Theme};
use crate::models::Task;
use crate::tasks::DashboardState;

/// Message shown while a fetch is running.
pub const LOADING_TEXT: &str = "Cargando tareas...";
/// Message shown before the first fetch.
pub const IDLE_TEXT: &str = "Pulsa r para cargar las tareas.";
/// Message shown for an empty list.
pub const EMPTY_TEXT: &str = "No hay tareas.";

fn task_row<'a>(task: &'a Task, theme: &Theme) -> Row<'a> {
    let status_color = if task.is_completed {
        theme.success
    } else {
        theme.warning
    };

    Row::new(vec![
        Cell::from(task.id.to_string()),
        Cell::from(task.title.as_str()),
        Cell::from(Span::styled(
            task.status_label(),
            Style::default().fg(status_color),
        )),
        Cell::from(task.created_at.format("%Y-%m-%d %H:%M").to_string()),
        Cell::from(task.description.as_deref().unwrap_or("")),
    ])
}

fn message(text: &str, color: ratatui::style::Color) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
}

/// Render the dashboard view
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Tareas ")
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let tasks = match &state.dashboard {
        DashboardState::Idle => {
            f.render_widget(message(IDLE_TEXT, theme.text_muted), inner);
            return;
        }
        DashboardState::Loading => {
            f.render_widget(message(LOADING_TEXT, theme.text_secondary), inner);
            return;
        }
        DashboardState::Error(error) => {
            f.render_widget(message(error, theme.error), inner);
            return;
        }
        DashboardState::Loaded(tasks) if tasks.is_empty() => {
            f.render_widget(message(EMPTY_TEXT, theme.text_muted), inner);
            return;
        }
        DashboardState::Loaded(tasks) => tasks,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let summary = state.dashboard.summary();
    let summary_line = Line::from(vec![
        Span::styled(
            format!("{} tareas", summary.total),
            Style::default().fg(theme.text),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} completadas", summary.completed),
            Style::default().fg(theme.success),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} pendientes", summary.pending),
            Style::default().fg(theme.warning),
        ),
    ]);
    f.render_widget(Paragraph::new(summary_line), chunks[0]);

    let header = Row::new(vec!["#", "Título", "Estado", "Creada", "Descripción"]).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = tasks
        .iter()
        .skip(state.dashboard_offset)
        .map(|task| task_row(task, theme))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .style(Style::default().fg(theme.text).bg(theme.background));

    f.render_widget(table, chunks[1]);
}
