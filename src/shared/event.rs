/**
 * Real-time Event System
 *
 * This module defines the events pushed to connected clients whenever a
 * post is created, updated or deleted. Every event carries a topic so the
 * SSE endpoint can filter, an action, and a JSON payload.
 */
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::shared::post::PostWithCreator;

/// Topic name for post mutations
pub const POSTS_TOPIC: &str = "posts";

/// Kind of post mutation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    Create,
    Update,
    Delete,
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealtimeEvent {
    /// Channel the event belongs to, e.g. `posts`
    pub topic: String,
    /// What happened
    pub action: PostAction,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// RFC3339 timestamp of when the event was built
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new real-time event
    pub fn new(topic: impl Into<String>, action: PostAction, payload: serde_json::Value) -> Self {
        Self {
            topic: topic.into(),
            action,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// `create` event carrying the new post and its creator
    pub fn post_created(post: &PostWithCreator) -> Self {
        Self::new(POSTS_TOPIC, PostAction::Create, json!({ "post": post }))
    }

    /// `update` event carrying the full updated post
    pub fn post_updated(post: &PostWithCreator) -> Self {
        Self::new(POSTS_TOPIC, PostAction::Update, json!({ "post": post }))
    }

    /// `delete` event carrying only the removed post id
    pub fn post_deleted(post_id: Uuid) -> Self {
        Self::new(POSTS_TOPIC, PostAction::Delete, json!({ "post": post_id }))
    }
}
