/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Account routes (signup, login, status)
 * 2. Feed routes (posts)
 * 3. Realtime subscription
 * 4. Static images
 * 5. Fallback handler (JSON 404)
 *
 * Tracing and CORS wrap everything, including the fallback, so preflight
 * requests and unknown routes still get CORS headers.
 */

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::realtime::handle_realtime_subscription;
use crate::backend::routes::api_routes::configure_account_routes;
use crate::backend::routes::feed_routes::configure_feed_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database, token keys, images, broadcast)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Static Files
///
/// Stored images are served from the configured image directory under
/// `/images`, matching the `images/<file>` references posts carry.
///
/// ## Fallback
///
/// Unknown routes get the standard error body with status 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_account_routes(router, &app_state);
    let router = configure_feed_routes(router, &app_state);

    let router = router.route("/realtime", get(handle_realtime_subscription));

    let router = router.nest_service("/images", ServeDir::new(&app_state.config.image_dir));

    let router = router.fallback(|| async { BackendError::not_found("Route not found.") });

    router
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Any origin; the methods and headers browsers need for the feed API
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
