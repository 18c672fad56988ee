//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod chrome;
pub mod dashboard;
pub mod handlers;
pub mod help_overlay;
pub mod panel;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::ModuleNode;
use crate::shortcuts::{ShortcutRegistry, CONTEXT_DASHBOARD, CONTEXT_HELP, CONTEXT_MENU};
use crate::tasks::{DashboardState, TaskClient};
use crate::tree::{path_to, TreeController, VisibleRow};

pub use help_overlay::HelpOverlayState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Width of the module sidebar, borders included.
const SIDEBAR_WIDTH: u16 = 40;

/// Which main view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Module tree and detail panel
    #[default]
    Menu,
    /// Task dashboard
    Dashboard,
}

impl View {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Menu => Self::Dashboard,
            Self::Dashboard => Self::Menu,
        }
    }
}

/// Screen regions, derived from the terminal size.
///
/// Rendering and mouse hit testing both use this, so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Menubar line
    pub menubar: Rect,
    /// Toolbar line
    pub toolbar: Rect,
    /// Company title bar
    pub title: Rect,
    /// Sidebar (menu view)
    pub sidebar: Rect,
    /// Detail panel (menu view)
    pub panel: Rect,
    /// Whole main area (dashboard view)
    pub main: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits the full terminal area.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Menubar
                Constraint::Length(1), // Toolbar
                Constraint::Length(3), // Title bar
                Constraint::Min(5),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        let main = rows[3];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(main);

        Self {
            menubar: rows[0],
            toolbar: rows[1],
            title: rows[2],
            sidebar: columns[0],
            panel: columns[1],
            main,
            status: rows[4],
        }
    }

    /// Row area of the sidebar, inside its border.
    #[must_use]
    pub fn sidebar_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.sidebar)
    }
}

/// Application state - single source of truth
pub struct AppState {
    // Core data
    /// Module forest, immutable for the session
    pub forest: Vec<ModuleNode>,
    /// Expansion and selection state
    pub tree: TreeController,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Current main view
    pub view: View,
    /// Cursor position in the visible rows
    pub cursor: usize,
    /// First visible row of the sidebar
    pub sidebar_offset: usize,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Last known terminal area
    pub screen: Rect,

    // Dashboard
    /// Task dashboard state
    pub dashboard: DashboardState,
    /// First visible task row
    pub dashboard_offset: usize,
    /// A fetch was requested and runs after the next frame
    pub fetch_pending: bool,

    // System resources
    /// Keyboard shortcuts
    pub shortcuts: ShortcutRegistry,
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a new session over `forest`.
    #[must_use]
    pub fn new(forest: Vec<ModuleNode>, config: Config) -> Self {
        let tree = TreeController::initialize(&forest);
        let help = config.ui.show_help_on_startup.then(HelpOverlayState::new);

        Self {
            forest,
            tree,
            theme: Theme::from_mode(config.ui.theme_mode),
            view: View::Menu,
            cursor: 0,
            sidebar_offset: 0,
            help,
            status_message: String::new(),
            error_message: None,
            screen: Rect::default(),
            dashboard: DashboardState::Idle,
            dashboard_offset: 0,
            fetch_pending: false,
            shortcuts: ShortcutRegistry::new(),
            config,
            should_quit: false,
        }
    }

    /// Visible rows of the module tree.
    #[must_use]
    pub fn rows(&self) -> Vec<VisibleRow<'_>> {
        self.tree.rows(&self.forest)
    }

    /// Id of the module under the cursor.
    #[must_use]
    pub fn cursor_id(&self) -> Option<String> {
        self.rows().get(self.cursor).map(|row| row.id().to_string())
    }

    /// Moves the cursor onto `id`, or onto its nearest visible ancestor.
    ///
    /// Used after expansion changes that may have hidden the cursor row.
    pub fn place_cursor(&mut self, id: &str) {
        let rows = self.rows();
        let position = rows.iter().position(|row| row.id() == id).or_else(|| {
            path_to(&self.forest, id).and_then(|path| {
                path.iter()
                    .rev()
                    .find_map(|ancestor| rows.iter().position(|row| row.id() == ancestor.id))
            })
        });
        let len = rows.len();

        self.cursor = match position {
            Some(index) => index,
            None => self.cursor.min(len.saturating_sub(1)),
        };
    }

    /// Keeps the cursor row inside a sidebar of `height` rows.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.sidebar_offset {
            self.sidebar_offset = self.cursor;
        } else if self.cursor >= self.sidebar_offset + height {
            self.sidebar_offset = self.cursor + 1 - height;
        }
    }

    /// Current shortcut context.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        if self.help.is_some() {
            return CONTEXT_HELP;
        }
        match self.view {
            View::Menu => CONTEXT_MENU,
            View::Dashboard => CONTEXT_DASHBOARD,
        }
    }

    /// Marks the dashboard as loading; the fetch runs after the next frame.
    pub fn request_refresh(&mut self) {
        self.dashboard = DashboardState::Loading;
        self.dashboard_offset = 0;
        self.fetch_pending = true;
    }

    /// Performs the pending fetch against the configured endpoint.
    pub fn perform_fetch(&mut self) {
        self.fetch_pending = false;
        let endpoint = self.config.dashboard.endpoint.clone();
        let timeout = Duration::from_secs(self.config.dashboard.timeout_secs);

        let outcome = TaskClient::new(endpoint, timeout).and_then(|client| client.fetch_tasks());
        if let Err(err) = &outcome {
            info!(error = %err, "Task fetch failed");
        }
        self.dashboard = DashboardState::from_outcome(outcome);
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!(modules = state.forest.len(), "TUI started");

    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.screen = Rect::new(0, 0, size.width, size.height);
        let areas = ScreenAreas::compute(state.screen);
        state.scroll_to_cursor(areas.sidebar_inner().height as usize);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // The Loading frame is on screen; now block on the fetch
        if state.fetch_pending {
            state.perform_fetch();
            continue;
        }

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            let quit = match event::read()? {
                Event::Key(key) => handlers::handle_key_event(state, key)?,
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                // Terminal resized, will re-render on next loop
                _ => false,
            };
            if quit {
                break;
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    debug!("TUI loop finished");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = ScreenAreas::compute(f.area());

    chrome::render_menubar(f, areas.menubar, &state.theme);
    chrome::render_toolbar(f, areas.toolbar, &state.theme);
    chrome::render_title_bar(f, areas.title, state);

    match state.view {
        View::Menu => {
            sidebar::render(f, areas.sidebar, state);
            panel::render(f, areas.panel, state);
        }
        View::Dashboard => dashboard::render(f, areas.main, state),
    }

    StatusBar::render(f, areas.status, state, &state.theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), &state.shortcuts, &state.theme);
    }
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
