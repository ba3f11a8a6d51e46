/**
 * Signup Handler
 *
 * This module implements the account registration handler for PUT /signup.
 *
 * # Registration Process
 *
 * 1. Trim inputs and lower-case the email
 * 2. Validate email, name and password, collecting every violation
 * 3. Reject an already registered email as a validation failure
 * 4. Hash the password exactly as submitted using bcrypt
 * 5. Create user with default status and no posts
 *
 * # Validation
 *
 * - Email must be well-formed
 * - Name must not be empty
 * - Password must be at least 5 characters long after trimming
 */

use axum::{extract::State, http::StatusCode, response::Json};
use validator::Validate;

use crate::backend::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email, User};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::AppState;
use crate::shared::FieldError;

const DUPLICATE_EMAIL: &str = "E-Mail address already exists!";

/// Signup handler
///
/// # Arguments
///
/// * `State(app_state)` - Application state (database, bcrypt cost)
/// * `JsonBody(request)` - Signup request containing email, name and password
///
/// # Returns
///
/// `201 Created` with the new user's id
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Any field invalid or email already registered
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// PUT /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "name": "Ada", "password": "secret" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User created!", "userId": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
pub async fn signup(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), BackendError> {
    // Length is checked on the trimmed password, the hash covers it as typed
    let typed_password = request.password.clone();
    let request = request.normalized();

    let mut errors = match request.validate() {
        Ok(()) => Vec::new(),
        Err(e) => FieldError::collect(&e),
    };

    let email_well_formed = !errors.iter().any(|e| e.field == "email");
    if email_well_formed && get_user_by_email(&app_state.db, &request.email).await?.is_some() {
        errors.push(FieldError::new("email", DUPLICATE_EMAIL));
        errors.sort_by(|a, b| a.field.cmp(&b.field));
    }

    if !errors.is_empty() {
        tracing::warn!("Signup rejected for {}: {} invalid field(s)", request.email, errors.len());
        return Err(BackendError::validation(errors));
    }

    let password_hash = hash_password(typed_password, app_state.config.bcrypt_cost).await?;
    let user = User::new(request.email, request.name, password_hash);

    create_user(&app_state.db, &user).await.map_err(|e| {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return BackendError::invalid_field("email", DUPLICATE_EMAIL);
            }
        }
        BackendError::from(e)
    })?;

    tracing::info!("User created: {} ({})", user.email, user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created!".to_string(),
            user_id: user.id,
        }),
    ))
}
