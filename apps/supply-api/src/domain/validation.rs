//! Field-level record validation.
//!
//! Validation is a separate collaborator the caller invokes before
//! `insert`/`replace`; the store itself accepts records verbatim.

use thiserror::Error;

/// Validation errors for incoming records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field holds an unacceptable value.
    #[error("invalid field '{field}': {message}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl ValidationError {
    /// Create an invalid-field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}

/// Records that can check their own field values.
pub trait Validate {
    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Reject empty or whitespace-only strings.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] when `value` is blank.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::invalid_field(field, "must not be empty"));
    }
    Ok(())
}
