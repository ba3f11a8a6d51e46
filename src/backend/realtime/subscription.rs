/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/realtime` endpoint.
 *
 * # Event Filtering
 *
 * Clients can filter events by topic using the `topics` query parameter:
 * - `?topics=posts` - Subscribe to post events only
 * - No parameter - Subscribe to every topic
 *
 * # Connection Management
 *
 * - Connections are kept alive using SSE keep-alive comments
 * - Lagged receivers log the number of skipped events and continue
 * - The stream ends when the broadcast channel closes
 */

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::shared::RealtimeEvent;

/// Handle real-time subscription (GET /realtime)
///
/// # Query Parameters
///
/// - `topics` - Comma-separated list of topics (optional)
///
/// # Example Request
///
/// ```http
/// GET /realtime?topics=posts HTTP/1.1
/// Accept: text/event-stream
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: posts
/// data: {"topic":"posts","action":"create","payload":{"post":{...}},"timestamp":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    Query(query): Query<HashMap<String, String>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let filter = parse_topics(query.get("topics").map(String::as_str));

    match &filter {
        Some(topics) => tracing::info!("[Realtime] Subscription filtered to topics: {:?}", topics),
        None => tracing::info!("[Realtime] Subscription to all topics"),
    }

    let broadcast_rx = broadcast_tx.subscribe();

    let stream = stream::unfold((broadcast_rx, filter), |(mut rx, filter)| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(topics) = &filter {
                        if !topics.iter().any(|t| *t == event.topic) {
                            continue;
                        }
                    }

                    let Some(sse_event) = to_sse_event(&event) else {
                        continue;
                    };

                    return Some((Ok(sse_event), (rx, filter)));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Parse a comma-separated topic list; empty or absent means "all"
pub fn parse_topics(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|topics| {
        topics
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
    })
    .filter(|topics| !topics.is_empty())
}

/// Render an event as SSE: `event:` is the topic, `data:` the JSON event
fn to_sse_event(event: &RealtimeEvent) -> Option<Event> {
    match serde_json::to_string(event) {
        Ok(data) => Some(Event::default().event(event.topic.as_str()).data(data)),
        Err(e) => {
            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
            None
        }
    }
}
