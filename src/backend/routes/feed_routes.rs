/**
 * Feed Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /posts?page=N` - Paginated feed, newest first
 * - `GET /posts/{post_id}` - Single post
 *
 * ## Authenticated
 * - `POST /posts` - Create a post (multipart)
 * - `PUT /posts/{post_id}` - Edit an owned post (multipart)
 * - `DELETE /posts/{post_id}` - Delete an owned post
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::feed::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure feed routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with post routes configured
pub fn configure_feed_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public: Router<AppState> = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{post_id}", get(get_post));

    let protected: Router<AppState> = Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{post_id}", put(update_post).delete(delete_post))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(protected)
}
