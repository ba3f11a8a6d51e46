/**
 * Delete Post Handler
 *
 * DELETE /posts/{postId} (auth). Only the creator may delete. After the
 * post row is gone the image is removed in the background and the post is
 * dropped from the owner's list; a failure there is logged, the delete
 * still succeeds.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::auth::users::remove_post;
use crate::backend::error::BackendError;
use crate::backend::feed::handlers::load_owned_post;
use crate::backend::feed::images::schedule_removal;
use crate::backend::feed::posts;
use crate::backend::middleware::AuthUser;
use crate::backend::realtime::broadcast_event;
use crate::backend::server::AppState;
use crate::shared::{MessageResponse, RealtimeEvent};

/// Delete post handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid bearer token
/// * `403 Forbidden` - Caller is not the post's creator
/// * `404 Not Found` - Post does not exist or id is malformed
pub async fn delete_post(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post = load_owned_post(&app_state, &post_id, auth.user_id).await?;

    posts::delete_post(&app_state.db, post.id).await?;
    schedule_removal(app_state.images.clone(), post.image_url.clone());
    remove_from_owner(&app_state, auth.user_id, post.id).await;

    broadcast_event(&app_state.realtime_broadcast, RealtimeEvent::post_deleted(post.id));

    tracing::info!("Post {} deleted by {}", post.id, auth.user_id);

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// Drop a post from its owner's list, logging instead of failing
async fn remove_from_owner(app_state: &AppState, user_id: Uuid, post_id: Uuid) {
    match remove_post(&app_state.db, user_id, post_id).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!("Post {} was not in the list of {}", post_id, user_id),
        Err(e) => tracing::warn!("Failed to update post list of {}: {}", user_id, e),
    }
}
