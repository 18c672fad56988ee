//! `tasks` command: fetch and print the task list.

use clap::Args;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::Task;
use crate::tasks::{TaskClient, TaskSummary};

/// Fetch tasks from the dashboard endpoint
#[derive(Debug, Clone, Args)]
pub struct TasksArgs {
    /// Endpoint URL (overrides `dashboard.endpoint`)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides `dashboard.timeout_secs`)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TasksOutput<'a> {
    tasks: &'a [Task],
    summary: TaskSummary,
}

impl TasksArgs {
    /// Execute the tasks command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| config.dashboard.endpoint.clone());
        let timeout = self.timeout.unwrap_or(config.dashboard.timeout_secs);
        if timeout == 0 {
            return Err(CliError::validation("Timeout must be at least 1 second"));
        }

        let client = TaskClient::new(endpoint, Duration::from_secs(timeout))
            .map_err(|e| CliError::fetch(e.to_string()))?;
        let tasks = client
            .fetch_tasks()
            .map_err(|e| CliError::fetch(format!("{}: {e}", client.endpoint())))?;
        info!(count = tasks.len(), "Fetched tasks");

        let summary = TaskSummary::of(&tasks);
        if self.json {
            return print_json(&TasksOutput {
                tasks: &tasks,
                summary,
            });
        }

        if tasks.is_empty() {
            println!("No tasks.");
            return Ok(());
        }
        println!("{:>5}  {:<8}  {:<16}  TITLE", "ID", "STATUS", "CREATED");
        for task in &tasks {
            println!(
                "{:>5}  {:<8}  {:<16}  {}",
                task.id,
                task.status_label(),
                task.created_at.format("%Y-%m-%d %H:%M"),
                task.title
            );
        }
        println!();
        println!(
            "{} tasks, {} completed, {} pending",
            summary.total, summary.completed, summary.pending
        );

        Ok(())
    }
}
