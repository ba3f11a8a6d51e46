/**
 * Server Initialization
 *
 * This module assembles the application from its configuration: database,
 * image storage, state, router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Open the image directory
 * 3. Build `AppState` (token keys, broadcast channel)
 * 4. Create and configure the router
 *
 * Every step is required; a failure aborts startup with `StartupError`.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::feed::images::DiskImageStorage;
use crate::backend::routes::router::create_router;
use crate::backend::server::database::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),
    #[error("image directory unavailable: {0}")]
    Images(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    let state = create_state(config).await?;
    Ok(create_router(state))
}

/// Build application state from configuration
pub async fn create_state(config: &AppConfig) -> Result<AppState, StartupError> {
    tracing::info!("Initializing quillfeed backend");

    let db = connect_database(&config.database_url).await?;

    let images = DiskImageStorage::new(&config.image_dir).map_err(|e| {
        tracing::error!("Cannot open image directory {:?}: {}", config.image_dir, e);
        e
    })?;
    tracing::info!("Storing images under {:?}", images.root());

    Ok(AppState::new(config.clone(), db, Arc::new(images)))
}
