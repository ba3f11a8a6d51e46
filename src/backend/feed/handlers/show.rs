/**
 * Get Post Handler
 *
 * GET /posts/{postId}. A missing post, and an id that is not a UUID at
 * all, both answer `200` with `"post": null` rather than `404`; clients
 * rely on that shape.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::feed::handlers::types::{parse_post_id, PostResponse};
use crate::backend::feed::posts;
use crate::backend::server::AppState;

/// Get post handler
///
/// # Example Response
///
/// ```json
/// { "message": "Post fetched successfully", "post": null }
/// ```
pub async fn get_post(
    State(app_state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, BackendError> {
    let post = match parse_post_id(&post_id) {
        Some(id) => posts::get_post(&app_state.db, id).await?,
        None => {
            tracing::debug!("Malformed post id {:?}", post_id);
            None
        }
    };

    Ok(Json(PostResponse {
        message: "Post fetched successfully".to_string(),
        post,
    }))
}
