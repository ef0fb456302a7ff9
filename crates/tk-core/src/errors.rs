//! Cross-cutting error types for the task tracker.
//!
//! Store-specific failures (`DatabaseError`) live in `tk-db` and wrap
//! `CoreError`. The CLI converts everything into `anyhow::Error` at the edge.

use chrono::NaiveDate;
use thiserror::Error;

use crate::enums::EntityType;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// Data failed validation (format, constraints, deadlines).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    #[must_use]
    pub fn not_found(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Reject a deadline earlier than `today`.
///
/// Applied once, when a task is created. Updates do not re-check it.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `deadline < today`.
pub fn validate_deadline(deadline: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if deadline < today {
        return Err(CoreError::Validation(format!(
            "Deadline can not be earlier than today ({deadline} < {today})"
        )));
    }
    Ok(())
}

/// Reject blank names and usernames.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `value` is empty after trimming.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
