//! Cross-cutting error types for taskdeck.
//!
//! Transport and storage errors live in `deck-store` and `deck-auth`; the
//! binary converges everything into `anyhow`.

use thiserror::Error;

/// Input rejected before any store call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task title.")]
    MissingTitle,

    #[error("Please select a task type.")]
    MissingCategory,

    #[error("Please enter a name.")]
    MissingName,

    #[error("Task types cannot be deleted. Toggle to 'Inactive' to disable them instead.")]
    CategoryDeletion,
}

/// Errors that can be raised by any taskdeck crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Form input failed a required-field check.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Whether this error was raised by input validation rather than I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        let err = CoreError::from(ValidationError::MissingCategory);
        assert_eq!(err.to_string(), "Please select a task type.");
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_is_not_validation() {
        let err = CoreError::NotFound {
            entity_type: "task".into(),
            id: "t-1".into(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Entity not found: task t-1");
    }
}
