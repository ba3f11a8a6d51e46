//! Shared Error Types
//!
//! Field-level validation failures, reported to clients in the `data` array
//! of a 422 response.
//!
//! # Usage
//!
//! ```rust
//! use quillfeed::shared::error::FieldError;
//!
//! let error = FieldError::new("email", "Please enter a valid email.");
//! assert_eq!(error.field, "email");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// A single rejected input field
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Validation error in field '{field}': {message}")]
pub struct FieldError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten `validator` output into a list sorted by field name
    ///
    /// Messages come from the `message = "..."` attribute of each rule; rules
    /// without one fall back to their code.
    pub fn collect(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut items: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();
        items.sort_by(|a, b| a.field.cmp(&b.field));
        items
    }
}
