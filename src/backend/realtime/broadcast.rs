/**
 * Real-time Event Broadcasting
 *
 * This module provides the broadcast channel type and the publish helper
 * used by post handlers.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. All subscribers receive a copy of each event.
 * Publishing with nobody listening is not an error.
 */

use tokio::sync::broadcast;

use crate::shared::RealtimeEvent;

/// Buffered events per subscriber before it starts lagging
pub const BROADCAST_CAPACITY: usize = 1000;

/// Real-time update event broadcast
///
/// Cloned into `AppState` and shared by every handler that publishes.
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Create a new broadcast channel
///
/// The initial receiver is dropped; subscribers attach with `subscribe()`.
pub fn new_broadcast() -> RealtimeEventBroadcast {
    let (tx, _) = broadcast::channel::<RealtimeEvent>(BROADCAST_CAPACITY);
    tx
}

/// Broadcast a real-time event to all subscribers
///
/// # Arguments
///
/// * `broadcast_tx` - The broadcast sender
/// * `event` - The event to broadcast
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: RealtimeEvent) -> usize {
    let topic = event.topic.clone();
    let action = event.action;
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!(
                "[Realtime] {} {:?} broadcast to {} subscribers",
                topic,
                action,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("[Realtime] No subscribers to receive {} {:?}", topic, action);
            0
        }
    }
}
