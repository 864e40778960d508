//! Category (task type) update builder.

use deck_core::entities::Category;
use deck_core::enums::CategoryStatus;
use deck_core::errors::ValidationError;
use deck_core::validation::optional_text;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CategoryStatus>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::MissingName);
        }
        Ok(())
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            category.description.clone_from(description);
        }
        if let Some(color) = &self.color {
            category.color.clone_from(color);
        }
        if let Some(status) = self.status {
            category.status = status;
        }
    }
}

pub struct CategoryUpdateBuilder(CategoryUpdate);

impl Default for CategoryUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CategoryUpdate::default())
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
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.0.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: CategoryStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> CategoryUpdate {
        self.0
    }
}
