/**
 * Update Post Handler
 *
 * PUT /posts/{postId} (auth). Multipart body with `title`, `content` and
 * either a new `image` file or the current reference as `image` text.
 * A text reference naming any other image is refused.
 *
 * When the image changes, the previous file is removed in the background
 * once the post is saved. A new upload whose request is then refused
 * (404/403) is removed the same way.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::MultipartBody;
use crate::backend::feed::handlers::form::PostForm;
use crate::backend::feed::handlers::load_owned_post;
use crate::backend::feed::handlers::types::UpdatePostResponse;
use crate::backend::feed::images::schedule_removal;
use crate::backend::feed::posts;
use crate::backend::middleware::AuthUser;
use crate::backend::realtime::broadcast_event;
use crate::backend::server::AppState;
use crate::shared::RealtimeEvent;

const FOREIGN_IMAGE: &str = "Image must be a new upload or the post's current image.";

/// Update post handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid bearer token
/// * `403 Forbidden` - Caller is not the post's creator
/// * `404 Not Found` - Post does not exist or id is malformed
/// * `422 Unprocessable Entity` - Title/content too short, no image at all, or
///   an `image` reference that is not the post's current image
/// * `500 Internal Server Error` - Storage or database failure
pub async fn update_post(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
    MultipartBody(multipart): MultipartBody,
) -> Result<Json<UpdatePostResponse>, BackendError> {
    let form = PostForm::from_multipart(multipart).await?;
    form.check()?;

    let PostForm {
        title,
        content,
        image,
        image_url,
    } = form;

    let (image_url, fresh_upload) = match (image, image_url) {
        (Some(upload), _) => (app_state.images.store(upload).await?, true),
        (None, Some(existing)) => (existing, false),
        (None, None) => {
            tracing::warn!("Update of post {} rejected: no image", post_id);
            return Err(BackendError::missing_image("No file picked."));
        }
    };

    let mut post = match load_owned_post(&app_state, &post_id, auth.user_id).await {
        Ok(post) => post,
        Err(e) => {
            if fresh_upload {
                schedule_removal(app_state.images.clone(), image_url);
            }
            return Err(e);
        }
    };

    if !fresh_upload && post.image_url != image_url {
        tracing::warn!("Update of post {} rejected: foreign image reference {}", post.id, image_url);
        return Err(BackendError::invalid_field("image", FOREIGN_IMAGE));
    }

    let replaced_image = (post.image_url != image_url).then(|| post.image_url.clone());
    post.apply_edit(title, content, image_url);

    if let Err(e) = posts::save_post(&app_state.db, &post.clone().into_post()).await {
        if fresh_upload {
            schedule_removal(app_state.images.clone(), post.image_url.clone());
        }
        return Err(e.into());
    }

    if let Some(old_image) = replaced_image {
        schedule_removal(app_state.images.clone(), old_image);
    }

    broadcast_event(&app_state.realtime_broadcast, RealtimeEvent::post_updated(&post));

    tracing::info!("Post {} updated by {}", post.id, auth.user_id);

    Ok(Json(UpdatePostResponse {
        message: "Post updated successfully".to_string(),
        post,
    }))
}
