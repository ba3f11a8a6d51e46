/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors:
 * `IntoResponse` for rendering, and `From` impls so handlers can use `?`
 * on store, hashing, signing, IO and extractor failures.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Could not find post.",
 *   "statusCode": 404
 * }
 * ```
 */

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::backend::error::types::BackendError;
use crate::shared::FieldError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    message: String,
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a [FieldError]>,
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server errors are logged here with their full detail; the client only
    /// sees the sanitised message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed with server error");
        }

        let body = ErrorBody {
            message: self.message(),
            status_code: status.as_u16(),
            data: self.data(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        Self::server(format!("database error: {}", err))
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        Self::server(format!("io error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::server(format!("password hashing failed: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::server(format!("token signing failed: {}", err))
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::server(format!("blocking task failed: {}", err))
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(FieldError::collect(&errors))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_field("body", rejection.body_text())
    }
}

impl From<MultipartRejection> for BackendError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::invalid_field("body", rejection.body_text())
    }
}

impl From<MultipartError> for BackendError {
    fn from(err: MultipartError) -> Self {
        Self::invalid_field("body", err.body_text())
    }
}
