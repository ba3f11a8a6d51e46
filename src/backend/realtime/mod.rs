//! Real-time Update Module
//!
//! This module pushes post mutations to connected clients. Handlers publish
//! a `RealtimeEvent` on a `tokio::sync::broadcast` channel; every open
//! `GET /realtime` stream receives a copy as a Server-Sent Event.
//!
//! # Architecture
//!
//! - **`broadcast`** - Channel type and the publish helper
//! - **`subscription`** - Server-Sent Events subscription handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event broadcasting utilities
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery
//!
//! At most once, to subscribers connected at publish time. There is no
//! replay; a subscriber that falls behind skips what it missed.
//!
//! # Event Filtering
//!
//! Clients can filter by topic using the `topics` query parameter:
//! - `?topics=posts` - Only post events
//! - No parameter - Every topic
//!
//! # Example
//!
//! ```rust
//! use quillfeed::backend::realtime::{broadcast_event, new_broadcast};
//! use quillfeed::shared::RealtimeEvent;
//!
//! let tx = new_broadcast();
//! let mut rx = tx.subscribe();
//! let delivered = broadcast_event(&tx, RealtimeEvent::post_deleted(uuid::Uuid::new_v4()));
//! assert_eq!(delivered, 1);
//! assert!(rx.try_recv().is_ok());
//! ```

/// Event broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, new_broadcast, RealtimeEventBroadcast};
pub use subscription::handle_realtime_subscription;
