//! Backend Module
//!
//! This module contains all server-side code: the Axum router, handlers,
//! middleware, the SQLite store and the realtime broadcaster.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Application state, database setup, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, session tokens, user store, account handlers
//! - **`feed`** - Post store, image storage, post handlers
//! - **`realtime`** - Broadcast channel and SSE subscription
//! - **`middleware`** - Bearer-token gate for protected routes
//! - **`extract`** - Request extractors that reject with `BackendError`
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and sessions
//! ├── feed/           - Posts and images
//! ├── realtime/       - Event broadcasting
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - JSON and multipart extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds cheap cloneable handles only: the `SqlitePool`, the
//! token keys, the image storage, the broadcast sender and the config.
//! There are no locks; the store is the single source of truth.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>` and propagate with `?`.
//! Best-effort side work (old image cleanup, owner list update on delete)
//! logs with `tracing::warn!` and never fails the request.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Posts and their images
pub mod feed;

/// Real-time update system
pub mod realtime;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::{broadcast_event, handle_realtime_subscription, RealtimeEventBroadcast};
pub use server::{create_app, AppState};
