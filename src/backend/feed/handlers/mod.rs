//! Post Handlers Module
//!
//! HTTP handlers for the post feed.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and the ownership lookup
//! ├── types.rs    - Query, response types and pagination
//! ├── form.rs     - Multipart form parsing and validation
//! ├── list.rs     - GET /posts
//! ├── create.rs   - POST /posts
//! ├── show.rs     - GET /posts/{postId}
//! ├── update.rs   - PUT /posts/{postId}
//! └── delete.rs   - DELETE /posts/{postId}
//! ```
//!
//! # Ownership
//!
//! Update and delete go through [`load_owned_post`]: the post must exist
//! (`404` otherwise, malformed ids included) and its creator must be the
//! authenticated user (`403` otherwise).

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::feed::posts;
use crate::backend::server::AppState;
use crate::shared::PostWithCreator;

/// Query, response types and pagination
pub mod types;

/// Multipart form parsing
pub mod form;

/// List handler
pub mod list;

/// Create handler
pub mod create;

/// Single post handler
pub mod show;

/// Update handler
pub mod update;

/// Delete handler
pub mod delete;

pub use create::create_post;
pub use delete::delete_post;
pub use list::list_posts;
pub use show::get_post;
pub use update::update_post;

/// Load a post the caller is allowed to modify
///
/// # Errors
///
/// * `NotFound` - id is malformed or no post matches
/// * `Forbidden` - post belongs to another user
pub async fn load_owned_post(
    app_state: &AppState,
    raw_post_id: &str,
    user_id: Uuid,
) -> Result<PostWithCreator, BackendError> {
    let post_id = types::parse_post_id(raw_post_id)
        .ok_or_else(|| BackendError::not_found(types::POST_NOT_FOUND))?;

    let post = posts::get_post_with_creator(&app_state.db, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found(types::POST_NOT_FOUND))?;

    if post.creator.id != user_id {
        tracing::warn!("User {} is not the creator of post {}", user_id, post_id);
        return Err(BackendError::Forbidden);
    }

    Ok(post)
}
