//! Task update builder.

use chrono::{DateTime, Utc};
use deck_core::entities::Task;
use deck_core::enums::{Priority, TaskStatus};
use deck_core::errors::ValidationError;
use deck_core::validation::optional_text;
use serde::Serialize;

/// Changed task fields.
///
/// `completed_at` and `updated_at` are filled by the store when the update is
/// applied, so the completion invariant cannot be bypassed by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(rename = "type_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) completed_at: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    /// Reject edits that would blank the title or drop the category.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ValidationError::MissingTitle);
        }
        if matches!(self.category_id, Some(None)) {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Whether the update carries any user-visible change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.project_id.is_none()
            && self.priority.is_none()
            && self.due_at.is_none()
            && self.status.is_none()
    }

    /// Write the changed fields onto `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(category_id) = &self.category_id {
            task.category_id.clone_from(category_id);
        }
        if let Some(project_id) = &self.project_id {
            task.project_id.clone_from(project_id);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_at) = self.due_at {
            task.due_at = due_at;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
        if let Some(updated_at) = self.updated_at {
            task.updated_at = updated_at;
        }
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into().trim().to_string());
        self
    }

    /// Blank descriptions are stored as null.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(optional_text(description));
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.0.category_id = Some(optional_text(category_id));
        self
    }

    #[must_use]
    pub fn project_id(mut self, project_id: Option<String>) -> Self {
        self.0.project_id = Some(optional_text(project_id));
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn due_at(mut self, due_at: Option<DateTime<Utc>>) -> Self {
        self.0.due_at = Some(due_at);
        self
    }

    #[must_use]
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_only_changed_fields() {
        let update = TaskUpdateBuilder::new()
            .title("  Renamed ")
            .description(Some("   ".into()))
            .priority(Priority::High)
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"title": "Renamed", "description": null, "priority": "High"})
        );
    }

    #[test]
    fn category_serializes_as_type_id() {
        let update = TaskUpdateBuilder::new().category_id(Some("work".into())).build();
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"type_id": "work"}));
    }

    #[test]
    fn validation_rejects_blank_title_and_cleared_category() {
        let blank = TaskUpdateBuilder::new().title("  ").build();
        assert_eq!(blank.validate(), Err(ValidationError::MissingTitle));

        let cleared = TaskUpdateBuilder::new().category_id(Some(String::new())).build();
        assert_eq!(cleared.validate(), Err(ValidationError::MissingCategory));

        assert!(TaskUpdate::default().is_empty());
        assert_eq!(TaskUpdate::default().validate(), Ok(()));
    }
}
