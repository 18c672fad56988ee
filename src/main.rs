//! Module Navigator - terminal navigation shell for business modules
//!
//! Without a subcommand the interactive TUI is launched; subcommands give
//! headless access for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use modnav::catalog::{builtin_forest, resolve_forest};
use modnav::cli::{CheckArgs, CliResult, ConfigArgs, FindArgs, TasksArgs, TreeArgs};
use modnav::config::Config;
use modnav::constants::APP_BINARY_NAME;
use modnav::{logging, tui};

/// Module Navigator - terminal navigation shell for business modules
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visible module rows for a given state
    Tree(TreeArgs),
    /// Find a module by id
    Find(FindArgs),
    /// Report forest statistics and duplicate ids
    Check(CheckArgs),
    /// Fetch and print the task list
    Tasks(TasksArgs),
    /// Inspect and edit configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Tree(args) => args.execute(),
            Self::Find(args) => args.execute(),
            Self::Check(args) => args.execute(),
            Self::Tasks(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        logging::init_stderr(cli.verbose);
        if let Err(err) = command.execute() {
            eprintln!("Error: {err}");
            std::process::exit(err.code.code());
        }
        return Ok(());
    }

    run_interactive(cli.verbose)
}

/// Loads config and forest, then runs the TUI until the user quits.
fn run_interactive(verbose: bool) -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: {err:#}");
            eprintln!("Continuing with default configuration.");
            Config::default()
        }
    };

    let forest = match resolve_forest(&config, None) {
        Ok(forest) => forest,
        Err(err) => {
            eprintln!("Warning: {err:#}");
            eprintln!("Continuing with the built-in module tree.");
            builtin_forest()
        }
    };

    match Config::log_file_path() {
        Ok(path) => {
            if let Err(err) = logging::init_file(&path, verbose) {
                eprintln!("Warning: logging disabled: {err:#}");
            }
        }
        Err(err) => eprintln!("Warning: logging disabled: {err:#}"),
    }

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(forest, config);
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(err) = &result {
        warn!("TUI exited with error: {err:#}");
    }
    result
}
