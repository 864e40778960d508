//! Project update builder.

use chrono::{DateTime, NaiveDate, Utc};
use deck_core::entities::Project;
use deck_core::enums::ProjectStatus;
use deck_core::errors::ValidationError;
use deck_core::validation::optional_text;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(rename = "type_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_end_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

impl ProjectUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::MissingName);
        }
        if matches!(self.category_id, Some(None)) {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            project.description.clone_from(description);
        }
        if let Some(category_id) = &self.category_id {
            project.category_id.clone_from(category_id);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(start) = self.start_date {
            project.start_date = start;
        }
        if let Some(end) = self.target_end_date {
            project.target_end_date = end;
        }
        if let Some(updated_at) = self.updated_at {
            project.updated_at = updated_at;
        }
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into().trim().to_string());
        self
    }

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
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn target_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.target_end_date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}
