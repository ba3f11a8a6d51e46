/**
 * Create Post Handler
 *
 * POST /posts (auth). Multipart body with `title`, `content` and an
 * `image` file.
 *
 * # Process
 *
 * 1. Parse and validate title/content
 * 2. Require an accepted image upload
 * 3. Store the image
 * 4. Insert the post, append it to the creator's post list
 * 5. Publish `create` on the `posts` topic
 *
 * Step 4's two writes are not atomic; a failure between them leaves a
 * post the creator's list does not reference.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::users::{append_post, get_user_by_id};
use crate::backend::error::BackendError;
use crate::backend::extract::MultipartBody;
use crate::backend::feed::handlers::form::PostForm;
use crate::backend::feed::handlers::types::CreatePostResponse;
use crate::backend::feed::images::schedule_removal;
use crate::backend::feed::posts;
use crate::backend::middleware::AuthUser;
use crate::backend::realtime::broadcast_event;
use crate::backend::server::AppState;
use crate::shared::{CreatorSummary, Post, RealtimeEvent};

/// Create post handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid bearer token
/// * `404 Not Found` - Token refers to a user that no longer exists
/// * `422 Unprocessable Entity` - Title/content too short, or no image
/// * `500 Internal Server Error` - Storage or database failure
///
/// # Example Request
///
/// ```http
/// POST /posts HTTP/1.1
/// Authorization: Bearer eyJhbGciOi...
/// Content-Type: multipart/form-data; boundary=X
///
/// --X
/// Content-Disposition: form-data; name="title"
///
/// My first post
/// --X
/// Content-Disposition: form-data; name="image"; filename="cat.png"
/// Content-Type: image/png
///
/// ...
/// --X--
/// ```
pub async fn create_post(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
    MultipartBody(multipart): MultipartBody,
) -> Result<(StatusCode, Json<CreatePostResponse>), BackendError> {
    let form = PostForm::from_multipart(multipart).await?;
    form.check()?;

    let upload = form.image.ok_or_else(|| {
        tracing::warn!("Post from {} rejected: no image", auth.user_id);
        BackendError::missing_image("No image provided.")
    })?;

    let user = get_user_by_id(&app_state.db, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found."))?;

    let image_url = app_state.images.store(upload).await?;
    let post = Post::new(form.title, form.content, image_url, user.id);

    if let Err(e) = posts::create_post(&app_state.db, &post).await {
        schedule_removal(app_state.images.clone(), post.image_url.clone());
        return Err(e.into());
    }

    append_post(&app_state.db, user.id, post.id).await?;

    let creator = CreatorSummary {
        id: user.id,
        name: user.name,
    };

    broadcast_event(
        &app_state.realtime_broadcast,
        RealtimeEvent::post_created(&post.clone().with_creator(creator.clone())),
    );

    tracing::info!("Post {} created by {}", post.id, creator.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully".to_string(),
            post,
            creator,
        }),
    ))
}
