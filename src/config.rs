//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{APP_CONFIG_DIR_NAME, DEFAULT_COMPANY_NAME, DEFAULT_TASKS_ENDPOINT};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "MODNAV_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a mode name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme mode '{other}' (expected auto, dark or light)"),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Forest file replacing the built-in module tree
    #[serde(default)]
    pub modules_file: Option<PathBuf>,
}

/// Task dashboard endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// URL answering `GET` with a JSON array of tasks
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_TASKS_ENDPOINT.to_string()
}

/// Default request timeout (10 seconds)
const fn default_timeout_secs() -> u64 {
    10
}

/// Upper bound for the request timeout.
const MAX_TIMEOUT_SECS: u64 = 300;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Company name shown in the title bar
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            company_name: default_company_name(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ModuleNavigator/config.toml`
/// - macOS: `~/Library/Application Support/ModuleNavigator/config.toml`
/// - Windows: `%APPDATA%\ModuleNavigator\config.toml`
///
/// # Validation
///
/// - `modules_file`, when set, must exist
/// - `endpoint` must be an `http://` or `https://` URL
/// - `timeout_secs` must be between 1 and 300
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Task dashboard settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ModuleNavigator/`
    /// - macOS: `~/Library/Application Support/ModuleNavigator/`
    /// - Windows: `%APPDATA%\ModuleNavigator\`
    ///
    /// `MODNAV_CONFIG_DIR` overrides the location (used by tests).
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the log file written while the TUI runs.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("modnav.log"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate_values()?;
        debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values, including that `modules_file` exists.
    pub fn validate(&self) -> Result<()> {
        self.validate_values()?;

        if let Some(modules_file) = &self.paths.modules_file {
            if !modules_file.exists() {
                anyhow::bail!(
                    "Modules file does not exist: {}",
                    modules_file.display()
                );
            }
        }

        Ok(())
    }

    /// Checks values that do not depend on the file system.
    ///
    /// Loading only runs these, so a modules file deleted after it was
    /// configured is reported when the forest is loaded, not here.
    fn validate_values(&self) -> Result<()> {
        let endpoint = self.dashboard.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            anyhow::bail!(
                "Dashboard endpoint must start with http:// or https://, got '{endpoint}'"
            );
        }

        if self.dashboard.timeout_secs == 0 || self.dashboard.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "Dashboard timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {}",
                self.dashboard.timeout_secs
            );
        }

        Ok(())
    }

    /// Sets a value by dotted key, validating the result.
    ///
    /// Supported keys: `paths.modules_file`, `dashboard.endpoint`,
    /// `dashboard.timeout_secs`, `ui.theme_mode`, `ui.company_name`,
    /// `ui.show_help_on_startup`. An empty value clears `paths.modules_file`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "paths.modules_file" => {
                updated.paths.modules_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "dashboard.endpoint" => updated.dashboard.endpoint = value.trim().to_string(),
            "dashboard.timeout_secs" => {
                updated.dashboard.timeout_secs = value
                    .parse()
                    .context(format!("Invalid timeout '{value}': expected whole seconds"))?;
            }
            "ui.theme_mode" => updated.ui.theme_mode = ThemeMode::parse(value)?,
            "ui.company_name" => updated.ui.company_name = value.to_string(),
            "ui.show_help_on_startup" => {
                updated.ui.show_help_on_startup = value
                    .parse()
                    .context(format!("Invalid boolean '{value}': expected true or false"))?;
            }
            other => anyhow::bail!("Unknown config key '{other}'"),
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
