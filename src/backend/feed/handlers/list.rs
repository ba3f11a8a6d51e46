/**
 * List Posts Handler
 *
 * GET /posts?page=N returns one page of posts, newest first, with each
 * creator resolved to `{ id, name }`, plus the total post count.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::feed::handlers::types::{page_offset, ListQuery, PostsPage, POSTS_PER_PAGE};
use crate::backend::feed::posts;
use crate::backend::server::AppState;

/// List posts handler
///
/// # Query Parameters
///
/// - `page` - 1-based page number; absent, non-numeric or < 1 means 1
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Fetched posts successfully.",
///   "posts": [{ "id": "…", "title": "…", "creator": { "id": "…", "name": "Ada" }, "…": "…" }],
///   "totalItems": 5
/// }
/// ```
pub async fn list_posts(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostsPage>, BackendError> {
    let page = query.page();
    let total_items = posts::count_posts(&app_state.db).await?;
    let posts = posts::list_posts(
        &app_state.db,
        page_offset(page, POSTS_PER_PAGE),
        POSTS_PER_PAGE,
    )
    .await?;

    tracing::debug!("Listed page {} ({} of {} posts)", page, posts.len(), total_items);

    Ok(Json(PostsPage {
        message: "Fetched posts successfully.".to_string(),
        posts,
        total_items,
    }))
}
