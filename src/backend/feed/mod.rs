//! Feed Module
//!
//! Posts and their images.
//!
//! # Architecture
//!
//! - **`posts`** - Post store (SQLite)
//! - **`images`** - `ImageStorage` trait and the disk implementation
//! - **`handlers`** - HTTP handlers for `/posts`
//!
//! # Module Structure
//!
//! ```text
//! feed/
//! ├── mod.rs      - Module exports and documentation
//! ├── posts.rs    - Post database operations
//! ├── images.rs   - Image storage
//! └── handlers/   - HTTP handlers
//! ```
//!
//! Every mutation publishes a `RealtimeEvent` on the `posts` topic after the
//! store write succeeds.

/// Post database operations
pub mod posts;

/// Image storage
pub mod images;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
pub use images::{DiskImageStorage, ImageStorage, ImageUpload};
