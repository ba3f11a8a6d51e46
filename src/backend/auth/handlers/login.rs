/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by normalised email
 * 2. Verify password using bcrypt
 * 3. Issue a session token for the loaded user
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{normalize_email, LoginRequest, LoginResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(app_state)` - Application state (database, token keys)
/// * `JsonBody(request)` - Login request containing email and password
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "secret" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "userId": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let email = normalize_email(&request.email);

    let user = get_user_by_email(&app_state.db, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, user not found: {}", email);
            BackendError::InvalidCredentials
        })?;

    if !verify_password(request.password, user.password.clone()).await {
        tracing::warn!("Login failed, invalid password for: {}", email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = create_token(user.id, &user.email, &app_state.token_keys)?;

    tracing::info!("User logged in: {} ({})", user.email, user.id);

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
    }))
}
