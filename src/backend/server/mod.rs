//! Server Module
//!
//! This module contains the server-side code for initializing the Axum
//! application: state, database setup and app assembly.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`database`** - SQLite pool creation and migrations
//! - **`init`** - App creation from `AppConfig`
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── database.rs     - Database connection and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` in the binary
//! 2. **Database**: connect, enable foreign keys, migrate
//! 3. **Images**: open (create) the image directory
//! 4. **State**: token keys and broadcast channel
//! 5. **Router**: routes, auth layer, tracing, CORS
//!
//! # Example
//!
//! ```rust,no_run
//! use quillfeed::backend::server::create_app;
//! use quillfeed::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database connection and migrations
pub mod database;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_state, StartupError};
pub use state::AppState;
