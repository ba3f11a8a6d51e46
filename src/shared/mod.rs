//! Shared Module
//!
//! Types that cross the boundary between the HTTP handlers, the realtime
//! feed and API clients. Everything here is plain data with serde derives;
//! nothing in this module touches the database or the network.
//!
//! # Overview
//!
//! - `post` - post payloads as clients see them
//! - `event` - realtime events broadcast on post mutations
//! - `error` - field-level validation errors
//! - `response` - small acknowledgement bodies
//! - `config` - application configuration

/// Post data structures
pub mod post;

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Acknowledgement response bodies
pub mod response;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use post::{CreatorSummary, Post, PostWithCreator};
pub use event::{PostAction, RealtimeEvent, POSTS_TOPIC};
pub use error::FieldError;
pub use response::MessageResponse;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
