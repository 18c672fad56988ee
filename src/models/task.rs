//! Task records served by the dashboard endpoint.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A task as returned by `GET <endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-side identifier
    pub id: i64,
    /// Short title
    pub title: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag
    pub is_completed: bool,
    /// Creation timestamp; a value without offset is taken as UTC
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Accepts RFC 3339, or an ISO 8601 date-time without offset.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

impl Task {
    /// Status column text.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_completed {
            "done"
        } else {
            "pending"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_task() {
        let json = r#"{
            "id": 7,
            "title": "Cerrar mes",
            "description": "Conciliar bancos",
            "is_completed": false,
            "created_at": "2024-03-01T12:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Cerrar mes");
        assert_eq!(task.description.as_deref(), Some("Conciliar bancos"));
        assert_eq!(task.status_label(), "pending");
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn test_null_description() {
        let json = r#"{"id":1,"title":"t","description":null,"is_completed":true,"created_at":"2024-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.description.is_none());
        assert_eq!(task.status_label(), "done");
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let json = r#"{"id":2,"title":"t","is_completed":false,"created_at":"2024-03-01T12:30:00.123456"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.created_at.to_rfc3339(),
            "2024-03-01T12:30:00.123456+00:00"
        );

        let json = r#"{"id":3,"title":"t","is_completed":false,"created_at":"2024-03-01 08:00:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    }

    #[test]
    fn test_offset_timestamp_converted_to_utc() {
        let json = r#"{"id":4,"title":"t","is_completed":true,"created_at":"2024-03-01T09:00:00-03:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        let json = r#"{"id":5,"title":"t","is_completed":true,"created_at":"yesterday"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_missing_created_at_rejected() {
        let json = r#"{"id":1,"title":"t","is_completed":true}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
