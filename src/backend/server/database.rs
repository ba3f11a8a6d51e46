/**
 * Database Setup
 *
 * This module opens the SQLite pool and applies the embedded migrations
 * from `migrations/`.
 *
 * # Connection Options
 *
 * - Foreign keys are enforced on every connection
 * - File databases are created if missing
 * - In-memory databases use a single long-lived connection, since each
 *   SQLite connection to `:memory:` is its own empty database
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const MAX_CONNECTIONS: u32 = 5;

/// Connect to the database and run migrations
///
/// # Arguments
///
/// * `database_url` - sqlx SQLite URL, e.g. `sqlite://quillfeed.db?mode=rwc`
///
/// # Errors
///
/// Fails if the URL does not parse, the database cannot be opened, or a
/// migration fails.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if is_memory_url(database_url) {
        return connect_in_memory().await;
    }

    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a fresh, migrated in-memory database
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Running database migrations...");
    sqlx::migrate!().run(pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::debug!("Database migrations completed successfully");
    Ok(())
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
