/**
 * Post Data Structures
 *
 * This module defines the post payloads handed to clients. A post is
 * serialized in one of two shapes:
 *
 * - `Post` carries the creator as a bare user id
 * - `PostWithCreator` carries the creator resolved to `{ id, name }`
 *
 * Timestamps are truncated to whole milliseconds so a post read back from
 * the store compares equal to the value that was written.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as persisted, with the creator as a user id
///
/// # Fields
/// * `id` - Post id (UUID v4)
/// * `title` - Post title, at least 5 characters
/// * `content` - Post body, at least 5 characters
/// * `image_url` - Relative storage reference, e.g. `images/<uuid>-cat.png`
/// * `creator` - Id of the user who created the post; never changes
/// * `created_at` / `updated_at` - Millisecond-precision UTC timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The public part of a post's creator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub name: String,
}

/// A post with its creator resolved, as returned by list and update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCreator {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time
    ///
    /// # Arguments
    /// * `title` - Trimmed, validated title
    /// * `content` - Trimmed, validated content
    /// * `image_url` - Reference returned by image storage
    /// * `creator` - Authenticated user id
    pub fn new(title: String, content: String, image_url: String, creator: Uuid) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a resolved creator
    pub fn with_creator(self, creator: CreatorSummary) -> PostWithCreator {
        PostWithCreator {
            id: self.id,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            creator,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl PostWithCreator {
    /// Drop the resolved creator back to its id
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            creator: self.creator.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Overwrite the editable fields and bump `updated_at`
    pub fn apply_edit(&mut self, title: String, content: String, image_url: String) {
        self.title = title;
        self.content = content;
        self.image_url = image_url;
        self.updated_at = now_millis();
    }
}

/// Current UTC time truncated to milliseconds
pub fn now_millis() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}
