use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// Whether a record has been acknowledged by the backend.
///
/// A create that fails to reach the store yields a `PendingSync` record with a
/// locally generated id so the user's input is not lost. Pending records are
/// never written back automatically; the next successful fetch replaces them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Confirmed,
    PendingSync,
}

impl SyncState {
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// A unit of work owned by exactly one user.
///
/// `completed_at` is present if and only if `status` is `Done`; use
/// [`crate::transition::apply_status`] to change status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "Priority::deserialize_lenient")]
    pub priority: Priority,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(rename = "type_id", default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "SyncState::is_confirmed")]
    pub sync: SyncState,
}

/// Form input for creating a task. Run through [`NewTask::validated`] before
/// any store call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type_id")]
    pub category_id: Option<String>,
    pub project_id: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROW: &str = r#"{
        "id": "6f1c",
        "user_id": "user-1",
        "title": "Write report",
        "description": null,
        "status": "In Progress",
        "priority": "High",
        "due_at": "2026-02-21T15:45:00+00:00",
        "type_id": "cat-1",
        "created_at": "2026-02-01T09:00:00Z",
        "updated_at": "2026-02-02T09:00:00Z",
        "completed_at": null
    }"#;

    #[test]
    fn parses_backend_row() {
        let task: Task = serde_json::from_str(ROW).unwrap();
        assert_eq!(task.owner_id, "user-1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category_id.as_deref(), Some("cat-1"));
        assert_eq!(task.project_id, None);
        assert_eq!(task.sync, SyncState::Confirmed);
    }

    #[test]
    fn confirmed_sync_state_is_not_serialized() {
        let task: Task = serde_json::from_str(ROW).unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("sync").is_none());
        assert_eq!(value["type_id"], "cat-1");

        let pending = Task {
            sync: SyncState::PendingSync,
            ..task
        };
        let value = serde_json::to_value(&pending).unwrap();
        assert_eq!(value["sync"], "pending_sync");
    }

    #[test]
    fn task_schema_accepts_backend_row() {
        let schema = serde_json::to_value(schemars::schema_for!(Task)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        let row: serde_json::Value = serde_json::from_str(ROW).unwrap();
        assert!(validator.is_valid(&row));
    }
}
