/**
 * Post Store
 *
 * Database operations for posts. Listing and single reads can resolve the
 * creator to `{ id, name }` with a join on `users`.
 *
 * Timestamps are stored as unix milliseconds. Listing orders by
 * `created_at DESC, seq DESC` so posts created in the same millisecond
 * still come back newest first.
 *
 * No statement here writes the `creator` column after insert.
 */

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::{CreatorSummary, Post, PostWithCreator};

const POST_WITH_CREATOR_COLUMNS: &str = r#"
    p.id, p.title, p.content, p.image_url, p.created_at, p.updated_at,
    u.id AS creator_id, u.name AS creator_name
"#;

/// Insert a new post
pub async fn create_post(pool: &SqlitePool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts (id, title, content, image_url, creator, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(post.id)
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.image_url)
    .bind(post.creator)
    .bind(post.created_at.timestamp_millis())
    .bind(post.updated_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a post by ID with the creator as a bare id
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, title, content, image_url, creator, created_at, updated_at
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(post_from_row).transpose()
}

/// Get a post by ID with its creator resolved
pub async fn get_post_with_creator(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<PostWithCreator>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM posts p JOIN users u ON u.id = p.creator WHERE p.id = ?",
        POST_WITH_CREATOR_COLUMNS
    );
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(post_with_creator_from_row).transpose()
}

/// Overwrite the editable fields of an existing post
///
/// Writes title, content, image and `updated_at`; never the creator.
pub async fn save_post(pool: &SqlitePool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET title = ?, content = ?, image_url = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.image_url)
    .bind(post.updated_at.timestamp_millis())
    .bind(post.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post by ID
///
/// # Returns
/// Whether a row was deleted
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Total number of posts
pub async fn count_posts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// One page of posts, newest first, creators resolved
///
/// # Arguments
/// * `skip` - Number of posts to skip
/// * `limit` - Maximum number of posts to return
pub async fn list_posts(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<PostWithCreator>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {}
        FROM posts p
        JOIN users u ON u.id = p.creator
        ORDER BY p.created_at DESC, p.seq DESC
        LIMIT ? OFFSET ?
        "#,
        POST_WITH_CREATOR_COLUMNS
    );
    let rows = sqlx::query(&sql)
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;

    rows.iter().map(post_with_creator_from_row).collect()
}

fn post_from_row(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        image_url: row.try_get("image_url")?,
        creator: row.try_get("creator")?,
        created_at: millis_to_datetime(row.try_get("created_at")?)?,
        updated_at: millis_to_datetime(row.try_get("updated_at")?)?,
    })
}

fn post_with_creator_from_row(row: &SqliteRow) -> Result<PostWithCreator, sqlx::Error> {
    Ok(PostWithCreator {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        image_url: row.try_get("image_url")?,
        creator: CreatorSummary {
            id: row.try_get("creator_id")?,
            name: row.try_get("creator_name")?,
        },
        created_at: millis_to_datetime(row.try_get("created_at")?)?,
        updated_at: millis_to_datetime(row.try_get("updated_at")?)?,
    })
}

fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| sqlx::Error::Decode(format!("timestamp out of range: {}", millis).into()))
}
