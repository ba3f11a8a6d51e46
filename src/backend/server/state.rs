/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * `FromRef` for the realtime broadcast sender used by the SSE handler.
 *
 * # Architecture
 *
 * `AppState` holds cloneable handles only:
 * - `SqlitePool` for users and posts
 * - `Arc<TokenKeys>` for signing and verifying session tokens
 * - `Arc<dyn ImageStorage>` for post images
 * - `broadcast::Sender` for realtime events
 * - `Arc<AppConfig>` for the loaded configuration
 *
 * # Example
 *
 * ```rust
 * use quillfeed::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _pool = &state.db;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::feed::images::ImageStorage;
use crate::backend::realtime::broadcast::{new_broadcast, RealtimeEventBroadcast};
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Session token keys, derived once from the configured secret
    pub token_keys: Arc<TokenKeys>,

    /// Where post images are written and removed
    pub images: Arc<dyn ImageStorage>,

    /// Generic real-time event broadcast channel
    ///
    /// Post handlers publish here; every `GET /realtime` stream holds a
    /// receiver.
    pub realtime_broadcast: RealtimeEventBroadcast,

    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from its parts
    ///
    /// Token keys and the broadcast channel are created here.
    pub fn new(config: AppConfig, db: SqlitePool, images: Arc<dyn ImageStorage>) -> Self {
        Self {
            db,
            token_keys: Arc::new(TokenKeys::from_config(&config)),
            images,
            realtime_broadcast: new_broadcast(),
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for RealtimeEventBroadcast
///
/// This allows the SSE handler to extract the broadcast sender directly.
impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}

/// State for handler unit tests: in-memory database, cheap bcrypt
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::feed::images::DiskImageStorage;
    use crate::backend::server::database::connect_in_memory;

    let config = AppConfig::builder()
        .jwt_secret("unit-test-secret")
        .bcrypt_cost(4)
        .image_dir(std::env::temp_dir().join("quillfeed-unit-images"))
        .build()
        .unwrap();
    let images = DiskImageStorage::new(&config.image_dir).unwrap();
    let db = connect_in_memory().await.unwrap();

    AppState::new(config, db, Arc::new(images))
}
