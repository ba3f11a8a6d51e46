/**
 * Backend Error Types
 *
 * This module defines `BackendError`, the single error type produced by
 * handlers, extractors and the auth middleware.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `ValidationFailed` (422) - request body failed shape checks
 * - `Unauthenticated` (401) - missing, malformed or expired bearer token
 * - `InvalidCredentials` (401) - login with unknown email or wrong password
 * - `Forbidden` (403) - caller does not own the post
 * - `NotFound` (404) - user or post does not exist
 * - `MissingImage` (422) - post submitted without an acceptable image
 *
 * ## Server Errors
 *
 * - `Server` (500) - store, hashing, signing or IO failure
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::FieldError;

/// Message sent to clients in place of any server-side failure detail
pub const SERVER_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Default message for validation failures
pub const VALIDATION_MESSAGE: &str = "Validation failed, entered data is incorrect.";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use quillfeed::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::invalid_field("title", "Title must be at least 5 characters long.");
/// assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
///
/// let err = BackendError::server("disk full");
/// assert_eq!(err.message(), "An internal server error occurred");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// One or more request fields were rejected
    #[error("{message}")]
    ValidationFailed {
        /// Summary message
        message: String,
        /// Per-field failures, sorted by field name
        data: Vec<FieldError>,
    },

    /// The request did not carry a valid bearer token
    #[error("Not authenticated.")]
    Unauthenticated,

    /// Login failed; the message never reveals which half was wrong
    #[error("A user with this email could not be found or the password is wrong.")]
    InvalidCredentials,

    /// The authenticated user is not allowed to touch this resource
    #[error("Not authorized!")]
    Forbidden,

    /// A user or post lookup came back empty
    #[error("{0}")]
    NotFound(String),

    /// A post was submitted without an image
    #[error("{0}")]
    MissingImage(String),

    /// Store, hashing, signing or IO failure
    ///
    /// The inner detail is logged, never sent to the client.
    #[error("Server error: {0}")]
    Server(String),
}

impl BackendError {
    /// Create a validation failure from a list of field errors
    pub fn validation(data: Vec<FieldError>) -> Self {
        Self::ValidationFailed {
            message: VALIDATION_MESSAGE.to_string(),
            data,
        }
    }

    /// Create a validation failure for a single field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::validation(vec![FieldError::new(field, message)])
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a missing-image error
    pub fn missing_image(message: impl Into<String>) -> Self {
        Self::MissingImage(message.into())
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed { .. } | Self::MissingImage(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Server(_) => SERVER_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Field errors, present only for validation failures
    pub fn data(&self) -> Option<&[FieldError]> {
        match self {
            Self::ValidationFailed { data, .. } => Some(data),
            _ => None,
        }
    }
}
