//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default texts of the shell.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Module Navigator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "modnav";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "ModuleNavigator";

/// Company name shown in the title bar unless configured otherwise.
pub const DEFAULT_COMPANY_NAME: &str = "Agrícola Molina Larraín Ltda.";

/// Default task list endpoint.
pub const DEFAULT_TASKS_ENDPOINT: &str = "http://localhost:8000/api/tasks";

/// Menubar entries.
pub const MENUBAR_ITEMS: [&str; 4] = ["Archivo", "Ver", "Utilidades", "Ayuda"];

/// Toolbar buttons.
pub const TOOLBAR_ITEMS: [&str; 3] = ["Memos", "DirAtras", "Ayuda"];

/// Sidebar header.
pub const SIDEBAR_TITLE: &str = "Menú";

/// Detail panel text when no module is selected.
pub const PANEL_EMPTY_TEXT: &str = "Selecciona un módulo en el panel izquierdo.";

/// Detail panel body for a selected module.
pub const PANEL_MODULE_TEXT: &str = "Aquí irá el contenido del módulo seleccionado.";
