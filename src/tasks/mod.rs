//! Task dashboard collaborator.
//!
//! Fetches the task list from a REST endpoint and folds the outcome into a
//! single visible state. A failed fetch never keeps a previously loaded or
//! partial list around.

mod client;
mod error;

pub use client::TaskClient;
pub use error::FetchError;

use serde::Serialize;

use crate::models::Task;

/// Visible state of the task dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Loaded(Vec<Task>),
    /// The last fetch failed, with a message for the user
    Error(String),
}

impl DashboardState {
    /// Folds a fetch outcome into the visible state.
    #[must_use]
    pub fn from_outcome(outcome: Result<Vec<Task>, FetchError>) -> Self {
        match outcome {
            Ok(tasks) => Self::Loaded(tasks),
            Err(err) => Self::Error(err.user_message()),
        }
    }

    /// Task rows to render; empty unless loaded.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        match self {
            Self::Loaded(tasks) => tasks,
            Self::Idle | Self::Loading | Self::Error(_) => &[],
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Counts over the loaded tasks.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary::of(self.tasks())
    }
}

/// Completion counts over a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// All tasks
    pub total: usize,
    /// Tasks marked completed
    pub completed: usize,
    /// Tasks still open
    pub pending: usize,
}

impl TaskSummary {
    /// Counts `tasks`.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, done: bool) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: None,
            is_completed: done,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_from_outcome_loaded() {
        let state = DashboardState::from_outcome(Ok(vec![task(1, false), task(2, true)]));
        assert_eq!(state.tasks().len(), 2);
        assert!(state.error().is_none());
        assert_eq!(
            state.summary(),
            TaskSummary {
                total: 2,
                completed: 1,
                pending: 1
            }
        );
    }

    #[test]
    fn test_from_outcome_error_has_no_rows() {
        let state = DashboardState::from_outcome(Err(FetchError::Status(500)));
        assert!(matches!(state, DashboardState::Error(_)));
        assert!(state.tasks().is_empty());
        assert_eq!(state.summary(), TaskSummary::default());
        assert!(state.error().unwrap().contains("500"));
    }

    #[test]
    fn test_loading_and_idle_have_no_rows() {
        assert!(DashboardState::Loading.tasks().is_empty());
        assert!(DashboardState::Loading.is_loading());
        assert!(DashboardState::Idle.tasks().is_empty());
        assert!(!DashboardState::Idle.is_loading());
    }

    #[test]
    fn test_error_replaces_previous_list() {
        let mut state = DashboardState::from_outcome(Ok(vec![task(1, true)]));
        assert_eq!(state.tasks().len(), 1);

        state = DashboardState::from_outcome(Err(FetchError::Transport("refused".into())));
        assert!(state.tasks().is_empty());
        assert_eq!(
            state.error(),
            Some("No se pudo conectar con el servidor de tareas.")
        );
    }
}
