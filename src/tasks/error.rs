//! Error types for the task dashboard fetch.

use thiserror::Error;

/// Errors that can occur while fetching the task list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The body was not a JSON list of tasks.
    #[error("invalid task list: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short message suitable for the dashboard error line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "No se pudo conectar con el servidor de tareas.".to_string(),
            Self::Status(code) => format!("El servidor respondió con error (HTTP {code})."),
            Self::Decode(_) => "La respuesta del servidor no es una lista de tareas válida.".to_string(),
        }
    }

    /// HTTP status code, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = FetchError::Status(500);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "server responded with HTTP 500");
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
