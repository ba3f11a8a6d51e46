//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, static images, layers, fallback
//! - **`api_routes`** - Account endpoints (signup, login, status)
//! - **`feed_routes`** - Post endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Account route handlers
//! └── feed_routes.rs  - Post route handlers
//! ```
//!
//! # Public and Protected Routes
//!
//! Each route module builds two routers. The protected one gets the bearer
//! token gate through `route_layer`, so it only runs for requests that
//! matched one of its routes; the two are then merged. Methods on the same
//! path may therefore have different access rules (`GET /posts` is open,
//! `POST /posts` is not).
//!
//! ## Account Routes
//!
//! - `PUT /signup` - User registration
//! - `POST /login` - User login
//! - `GET /status` - Read own status (requires authentication)
//! - `POST /status` - Replace own status (requires authentication)
//!
//! ## Feed Routes
//!
//! - `GET /posts?page=N` - One page of posts
//! - `GET /posts/{post_id}` - Single post
//! - `POST /posts` - Create post (requires authentication)
//! - `PUT /posts/{post_id}` - Edit post (requires authentication)
//! - `DELETE /posts/{post_id}` - Delete post (requires authentication)
//!
//! ## Other
//!
//! - `GET /realtime` - Server-sent post events
//! - `GET /images/*` - Stored post images

/// Main router creation
pub mod router;

/// Account endpoint handlers
pub mod api_routes;

/// Post endpoint handlers
pub mod feed_routes;

pub use router::create_router;
