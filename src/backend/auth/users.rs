/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. A user's post
 * list lives in the `user_posts` table, ordered by `position`. Every write
 * touches only the column or list entry it changes, so requests working
 * from older copies of the same user do not undo each other.
 */

use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Status every new account starts with
pub const DEFAULT_STATUS: &str = "I am new!";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Email address, lower-cased
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password: String,
    /// Free-text status line
    pub status: String,
    /// Ids of posts this user created, oldest first
    pub posts: Vec<Uuid>,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    password: String,
    status: String,
}

impl UserRow {
    fn with_posts(self, posts: Vec<Uuid>) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            password: self.password,
            status: self.status,
            posts,
        }
    }
}

impl User {
    /// Build a fresh user with the default status and no posts
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password: password_hash,
            status: DEFAULT_STATUS.to_string(),
            posts: Vec::new(),
        }
    }
}

/// Insert a new user
///
/// # Errors
/// Fails with a database error when the email is already taken.
pub async fn create_user(pool: &SqlitePool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO users (id, email, name, password, status)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password)
    .bind(&user.status)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, password, status FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let posts = load_post_ids(pool, row.id).await?;
            Ok(Some(row.with_posts(posts)))
        }
        None => Ok(None),
    }
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, password, status FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let posts = load_post_ids(pool, row.id).await?;
            Ok(Some(row.with_posts(posts)))
        }
        None => Ok(None),
    }
}

/// Overwrite a user's status
///
/// # Returns
/// `false` when no user has this id
pub async fn update_status(pool: &SqlitePool, user_id: Uuid, status: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET status = ? WHERE id = ?")
        .bind(status)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Append a post id to the end of a user's post list
pub async fn append_post(pool: &SqlitePool, user_id: Uuid, post_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_posts (user_id, post_id, position)
        SELECT ?, ?, COALESCE(MAX(position), -1) + 1
        FROM user_posts WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Drop a post id from a user's post list
///
/// # Returns
/// `false` when the list did not reference the post
pub async fn remove_post(pool: &SqlitePool, user_id: Uuid, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user_posts WHERE user_id = ? AND post_id = ?")
        .bind(user_id)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

async fn load_post_ids(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "SELECT post_id FROM user_posts WHERE user_id = ? ORDER BY position",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
