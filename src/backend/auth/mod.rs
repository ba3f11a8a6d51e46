//! Authentication Module
//!
//! This module handles account registration, login, and session tokens,
//! plus the user store the rest of the backend reads from.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT token generation and validation
//! - **`users`** - User data model and database operations
//! - **`handlers`** - HTTP handlers for account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, name, password → validated → user created
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → middleware
//!    verifies → `AuthenticatedUser` in request extensions
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256-signed and expire after one hour
//! - The signing secret comes from configuration only
//! - Invalid credentials return 401 with one message for every cause

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_status, login, signup, update_status};
pub use sessions::{create_token, verify_token, Claims, TokenKeys};
pub use users::User;
