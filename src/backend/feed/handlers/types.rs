/**
 * Post Handler Types
 *
 * Query parameters, response bodies and pagination arithmetic for the
 * post handlers.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{CreatorSummary, Post, PostWithCreator};

/// Posts returned per page
pub const POSTS_PER_PAGE: i64 = 2;

pub const POST_NOT_FOUND: &str = "Could not find post.";

/// Parse a post id path segment; malformed ids match nothing
pub fn parse_post_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// `GET /posts` query
///
/// `page` is kept as text so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

impl ListQuery {
    /// Requested page, 1 when absent, non-numeric or below 1
    pub fn page(&self) -> i64 {
        page_number(self.page.as_deref())
    }
}

/// Parse a page number, defaulting to 1
pub fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Number of posts to skip for a page
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    page.max(1).saturating_sub(1).saturating_mul(per_page)
}

/// `GET /posts` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    pub message: String,
    pub posts: Vec<PostWithCreator>,
    pub total_items: i64,
}

/// `POST /posts` response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: Post,
    pub creator: CreatorSummary,
}

/// `GET /posts/{postId}` response; `post` is null when nothing matched
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub message: String,
    pub post: Option<Post>,
}

/// `PUT /posts/{postId}` response
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePostResponse {
    pub message: String,
    pub post: PostWithCreator,
}
