/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token from the
 * Authorization header and hands the verified identity to handlers through
 * request extensions.
 *
 * The middleware does not look the user up; a token for a deleted account
 * passes here and handlers report `404` for it.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from `Authorization: Bearer <token>`
/// 2. Verifies signature and expiry
/// 3. Parses the user id from the claims
/// 4. Attaches `AuthenticatedUser` to request extensions
///
/// Any failure short-circuits with `401 Not authenticated.` before the
/// handler runs.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let claims = verify_token(token, &app_state.token_keys).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::Unauthenticated
    })?;

    let user_id = claims.user_uuid().ok_or_else(|| {
        tracing::warn!("Token carries a non-UUID user id: {}", claims.user_id);
        BackendError::Unauthenticated
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header
///
/// # Errors
/// `Unauthenticated` when the header is missing, not UTF-8, uses another
/// scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthenticated
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::Unauthenticated
        })?;

    Ok(token)
}

/// Axum extractor for authenticated user
///
/// Reads the identity the middleware stored in request extensions. On a
/// route without the middleware it rejects with `Unauthenticated`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
