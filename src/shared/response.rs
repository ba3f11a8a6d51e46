/**
 * Acknowledgement Responses
 *
 * Handlers that only confirm an action reply with a single `message` field.
 */
use serde::{Deserialize, Serialize};

/// `{ "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
