/**
 * Account Handler Types
 *
 * This module defines the request and response types used by the account
 * handlers. Request fields default to empty strings so a missing field is
 * reported by validation alongside every other violation instead of as a
 * JSON shape error.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default, Clone, Validate)]
pub struct SignupRequest {
    /// User's email address
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    /// Display name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    #[validate(length(min = 5, message = "Password must be at least 5 characters long."))]
    pub password: String,
}

impl SignupRequest {
    /// Trim every field and lower-case the email
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            name: self.name.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Status update request
#[derive(Deserialize, Serialize, Debug, Default, Clone, Validate)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Status must not be empty."))]
    pub status: String,
}

impl UpdateStatusRequest {
    pub fn normalized(self) -> Self {
        Self {
            status: self.status.trim().to_string(),
        }
    }
}

/// Signup response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Login response
///
/// Contains the session token (1 hour lifetime) and the user's id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Status read response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

/// Normalise an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
