//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set a configuration value by dotted key
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dotted key, e.g. `dashboard.endpoint`
    key: String,

    /// New value (empty clears `paths.modules_file`)
    value: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config()?;

        config
            .set(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("{} updated.", self.key);
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Module Navigator Configuration");
    println!("==============================");
    println!();

    println!("Paths:");
    match &config.paths.modules_file {
        Some(path) => println!("  Modules File: {}", path.display()),
        None => println!("  Modules File: (built-in)"),
    }
    println!();

    println!("Dashboard:");
    println!("  Endpoint: {}", config.dashboard.endpoint);
    println!("  Timeout: {}s", config.dashboard.timeout_secs);
    println!();

    println!("UI:");
    println!(
        "  Theme Mode: {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    println!("  Company Name: {}", config.ui.company_name);
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();
}
