/**
 * Status Handlers
 *
 * GET /status and POST /status read and overwrite the authenticated user's
 * free-text status line. Both require the auth middleware.
 */

use axum::{extract::State, response::Json};
use validator::Validate;

use crate::backend::auth::handlers::types::{StatusResponse, UpdateStatusRequest};
use crate::backend::auth::users::{self, get_user_by_id};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::server::AppState;
use crate::shared::MessageResponse;

const USER_NOT_FOUND: &str = "User not found.";

/// Get the authenticated user's status
///
/// # Errors
///
/// * `401 Unauthorized` - No valid bearer token
/// * `404 Not Found` - Token refers to a user that no longer exists
pub async fn get_status(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<StatusResponse>, BackendError> {
    let user = get_user_by_id(&app_state.db, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    Ok(Json(StatusResponse {
        message: "User status fetched successfully".to_string(),
        status: user.status,
    }))
}

/// Overwrite the authenticated user's status
///
/// # Errors
///
/// * `401 Unauthorized` - No valid bearer token
/// * `404 Not Found` - Token refers to a user that no longer exists
/// * `422 Unprocessable Entity` - Status empty after trimming
///
/// # Example Request
///
/// ```http
/// POST /status HTTP/1.1
/// Authorization: Bearer eyJhbGciOi...
/// Content-Type: application/json
///
/// { "status": "Writing a novel" }
/// ```
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let request = request.normalized();
    request.validate()?;

    if !users::update_status(&app_state.db, auth.user_id, &request.status).await? {
        return Err(BackendError::not_found(USER_NOT_FOUND));
    }

    tracing::info!("Status updated for user {}", auth.user_id);

    Ok(Json(MessageResponse::new("User status updated successfully")))
}
