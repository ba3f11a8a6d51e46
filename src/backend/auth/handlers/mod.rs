//! Account Handlers Module
//!
//! This module contains all HTTP handlers for account endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Account registration handler
//! ├── login.rs    - Authentication handler
//! └── status.rs   - Status read/update handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - PUT /signup - Account registration
//! - **`login`** - POST /login - Authentication
//! - **`get_status`** - GET /status - Read own status (auth)
//! - **`update_status`** - POST /status - Overwrite own status (auth)
//!
//! # Example
//!
//! ```rust,no_run
//! use quillfeed::backend::auth::handlers::{signup, login};
//! use quillfeed::backend::AppState;
//! use axum::{routing::{post, put}, Router};
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/signup", put(signup))
//!     .route("/login", post(login))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Status handlers
pub mod status;

// Re-export commonly used types
pub use types::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, StatusResponse,
    UpdateStatusRequest,
};

// Re-export handlers
pub use login::login;
pub use signup::signup;
pub use status::{get_status, update_status};
