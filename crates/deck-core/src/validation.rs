//! Required-field checks for form input.
//!
//! Validation runs before any store call. Text fields are trimmed, and an
//! empty optional field becomes `None`.

use crate::entities::{NewCategory, NewProject, NewTask};
use crate::errors::ValidationError;

/// Trim an optional free-text field; blank input becomes `None`.
#[must_use]
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn required_id(raw: Option<String>) -> Option<String> {
    optional_text(raw)
}

impl NewTask {
    /// Normalize and check the form: title and category are mandatory.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingTitle`] for a blank title,
    /// [`ValidationError::MissingCategory`] when no category is selected.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let category_id = required_id(self.category_id).ok_or(ValidationError::MissingCategory)?;
        Ok(Self {
            title,
            description: optional_text(self.description),
            category_id: Some(category_id),
            project_id: optional_text(self.project_id),
            ..self
        })
    }
}

impl NewCategory {
    /// # Errors
    ///
    /// [`ValidationError::MissingName`] for a blank name.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self {
            name,
            description: optional_text(self.description),
            color: self.color,
        })
    }
}

impl NewProject {
    /// # Errors
    ///
    /// [`ValidationError::MissingName`] for a blank name,
    /// [`ValidationError::MissingCategory`] when no category is selected.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let category_id = required_id(self.category_id).ok_or(ValidationError::MissingCategory)?;
        Ok(Self {
            name,
            description: optional_text(self.description),
            category_id: Some(category_id),
            ..self
        })
    }
}
