/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies HS256 session tokens. Keys are derived
 * once from the configured secret and shared through `AppState`.
 *
 * # Claims
 *
 * ```json
 * { "email": "ada@example.com", "userId": "…uuid…", "iat": 1700000000, "exp": 1700003600 }
 * ```
 */

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Email the token was issued for
    pub email: String,
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the user id, `None` when the claim is not a UUID
    pub fn user_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.user_id).ok()
    }
}

/// Signing and verification keys plus token lifetime
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    /// Derive keys from a shared secret
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Derive keys from the application config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl)
    }
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID)
/// * `email` - User email
/// * `keys` - Signing keys
///
/// # Returns
/// JWT token string valid for the keys' configured lifetime
pub fn create_token(
    user_id: Uuid,
    email: &str,
    keys: &TokenKeys,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp().max(0) as u64;

    let claims = Claims {
        email: email.to_string(),
        user_id: user_id.to_string(),
        iat: now,
        exp: now + keys.ttl.as_secs(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

/// Verify and decode a JWT token
///
/// Rejects bad signatures, malformed tokens and expired tokens.
///
/// # Arguments
/// * `token` - JWT token string
/// * `keys` - Verification keys
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str, keys: &TokenKeys) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(token, &keys.decoding, &validation)?;
    Ok(token_data.claims)
}
