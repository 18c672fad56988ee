//! Centralized shortcut and action system.
//!
//! This module maps keyboard shortcuts to actions per UI context, and is
//! also the source of the help overlay and status bar hints.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the module menu view.
pub const CONTEXT_MENU: &str = "menu";
/// Context name for the task dashboard view.
pub const CONTEXT_DASHBOARD: &str = "dashboard";
/// Context name while the help overlay is open.
pub const CONTEXT_HELP: &str = "help";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    MoveUp,
    MoveDown,
    JumpToFirst,
    JumpToLast,

    // === TREE ===
    SelectRow,
    ToggleExpansion,
    ExpandOrEnter,
    CollapseOrParent,
    ExpandAll,
    CollapseAll,
    RevealSelection,

    // === VIEWS ===
    SwitchView,

    // === DASHBOARD ===
    RefreshTasks,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Stable action id, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::SelectRow => "select_row",
            Self::ToggleExpansion => "toggle_expansion",
            Self::ExpandOrEnter => "expand_or_enter",
            Self::CollapseOrParent => "collapse_or_parent",
            Self::ExpandAll => "expand_all",
            Self::CollapseAll => "collapse_all",
            Self::RevealSelection => "reveal_selection",
            Self::SwitchView => "switch_view",
            Self::RefreshTasks => "refresh_tasks",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// One-line description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MoveUp => "Move cursor up",
            Self::MoveDown => "Move cursor down",
            Self::JumpToFirst => "Jump to first row",
            Self::JumpToLast => "Jump to last row",
            Self::SelectRow => "Select module under cursor",
            Self::ToggleExpansion => "Expand/collapse without selecting",
            Self::ExpandOrEnter => "Expand, or step into children",
            Self::CollapseOrParent => "Collapse, or step to parent",
            Self::ExpandAll => "Expand all modules",
            Self::CollapseAll => "Collapse all modules",
            Self::RevealSelection => "Reveal selected module",
            Self::SwitchView => "Switch menu / tasks view",
            Self::RefreshTasks => "Reload task list",
            Self::ToggleHelp => "Toggle this help",
            Self::Quit => "Quit",
            Self::Cancel => "Clear message / close overlay",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Terminals disagree on whether symbols like `?` or `*` carry SHIFT,
    /// so SHIFT is dropped for non-letter characters.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if let KeyCode::Char(c) = event.code {
            if !c.is_ascii_alphabetic() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable label, e.g. `Ctrl+Q` or `Space`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Registration order per context, for help listings
    order: Vec<(String, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_menu_shortcuts();
        registry.register_dashboard_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the module menu.
    fn register_menu_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MENU;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::MoveUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === TREE ===
        self.register(ctx, K::Enter, M::NONE, Action::SelectRow);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleExpansion);
        self.register(ctx, K::Right, M::NONE, Action::ExpandOrEnter);
        self.register(ctx, K::Char('l'), M::NONE, Action::ExpandOrEnter);
        self.register(ctx, K::Left, M::NONE, Action::CollapseOrParent);
        self.register(ctx, K::Char('h'), M::NONE, Action::CollapseOrParent);
        self.register(ctx, K::Char('*'), M::NONE, Action::ExpandAll);
        self.register(ctx, K::Char('-'), M::NONE, Action::CollapseAll);
        self.register(ctx, K::Char('g'), M::NONE, Action::RevealSelection);

        self.register_common(ctx);
    }

    /// Register all shortcuts for the task dashboard.
    fn register_dashboard_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_DASHBOARD;

        self.register(ctx, K::Up, M::NONE, Action::MoveUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('r'), M::NONE, Action::RefreshTasks);
        self.register(ctx, K::F(5), M::NONE, Action::RefreshTasks);

        self.register_common(ctx);
    }

    /// Register shortcuts while the help overlay is open.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_HELP;

        self.register(ctx, K::Up, M::NONE, Action::MoveUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Shortcuts shared by both views.
    fn register_common(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Tab, M::NONE, Action::SwitchView);
        self.register(ctx, K::BackTab, M::SHIFT, Action::SwitchView);
        self.register(ctx, K::BackTab, M::NONE, Action::SwitchView);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.order.push((context.to_string(), binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Actions of a context with all their key labels, in registration order.
    #[must_use]
    pub fn help_entries(&self, context: &str) -> Vec<(String, Action)> {
        let mut entries: Vec<(Vec<String>, Action)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if ctx != context {
                continue;
            }
            match entries.iter_mut().find(|(_, a)| a == action) {
                Some((keys, _)) => {
                    let label = binding.label();
                    if !keys.contains(&label) {
                        keys.push(label);
                    }
                }
                None => entries.push((vec![binding.label()], *action)),
            }
        }
        entries
            .into_iter()
            .map(|(keys, action)| (keys.join("/"), action))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
