//! Blocking HTTP client for the task list endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};

use super::error::FetchError;
use crate::constants::APP_BINARY_NAME;
use crate::models::Task;

/// Client for `GET <endpoint>` returning a JSON array of tasks.
#[derive(Debug, Clone)]
pub struct TaskClient {
    client: Client,
    endpoint: String,
}

impl TaskClient {
    /// Creates a client with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the full task list.
    ///
    /// One attempt, no retry. Any non-success status is an error even if
    /// the body would parse.
    pub fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
        debug!(endpoint = %self.endpoint, "Fetching tasks");

        let response = self
            .client
            .get(&self.endpoint)
            .header(
                USER_AGENT,
                format!("{}/{}", APP_BINARY_NAME, env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "Task fetch failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let tasks: Vec<Task> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(count = tasks.len(), "Fetched tasks");
        Ok(tasks)
    }
}
