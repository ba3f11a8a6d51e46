//! Quillfeed - Main Library
//!
//! Quillfeed is a small blogging backend: accounts with bearer-token sessions,
//! posts with image attachments, and a live feed of post changes pushed to
//! connected clients.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types used by handlers, the realtime feed and tests
//!   - Post DTOs, realtime events, field errors
//!   - Application configuration
//!
//! - **`backend`** - Axum server
//!   - Account handlers (signup, login, status)
//!   - Feed handlers (list, create, read, update, delete posts)
//!   - Bearer-token middleware
//!   - SQLite store, image storage, SSE broadcast
//!
//! # Usage
//!
//! ```rust,no_run
//! use quillfeed::backend::server::init::create_app;
//! use quillfeed::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Handlers return `Result<_, BackendError>`; one `IntoResponse` impl renders
//!   every failure as `{ message, statusCode, data? }`
//! - Configuration problems surface as `ConfigError` before the server binds

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
