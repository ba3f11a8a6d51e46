/**
 * Account Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `PUT /signup` - User registration
 * - `POST /login` - User login, returns a bearer token
 *
 * ## Authenticated
 * - `GET /status` - Read the caller's status
 * - `POST /status` - Replace the caller's status
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::auth::{get_status, login, signup, update_status};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with account routes configured
pub fn configure_account_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public: Router<AppState> = Router::new()
        .route("/signup", put(signup))
        .route("/login", post(login));

    let protected: Router<AppState> = Router::new()
        .route("/status", get(get_status).post(update_status))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(protected)
}
