//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token gate for protected routes and the
//!   `AuthUser` extractor handlers use to read the verified identity
//!
//! # Example
//!
//! ```rust,no_run
//! use quillfeed::backend::middleware::auth_middleware;
//! use quillfeed::backend::AppState;
//! use axum::{middleware::from_fn_with_state, Router};
//!
//! # fn example(state: AppState, protected: Router<AppState>) -> Router<AppState> {
//! protected.route_layer(from_fn_with_state(state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
