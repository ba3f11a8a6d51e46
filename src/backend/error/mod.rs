//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! extractor in the backend, and its conversion into an HTTP response.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` and `From` implementations
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Response Format
//!
//! Every error renders as
//!
//! ```json
//! { "message": "Validation failed, entered data is incorrect.", "statusCode": 422, "data": [{ "field": "email", "message": "..." }] }
//! ```
//!
//! `data` is present only for validation failures. Server errors are logged
//! and their message replaced with a generic one before leaving the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use quillfeed::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("Could not find post."))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, SERVER_ERROR_MESSAGE};
