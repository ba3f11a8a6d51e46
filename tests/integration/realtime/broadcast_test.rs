//! Real-time broadcast integration tests

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tokio::time::{timeout, Duration};
use tower::ServiceExt;

use quillfeed::backend::realtime::{broadcast_event, new_broadcast};
use quillfeed::shared::{PostAction, RealtimeEvent, POSTS_TOPIC};

use crate::common::{create_test_user, MultipartForm, TestApp};

/// Read SSE frames until one carries data, returning its text
async fn next_data_frame(body: &mut Body) -> String {
    timeout(Duration::from_secs(2), async {
        loop {
            let frame = body
                .frame()
                .await
                .expect("stream ended")
                .expect("stream failed");
            if let Some(data) = frame.data_ref() {
                let text = String::from_utf8_lossy(data).into_owned();
                if text.contains("data:") {
                    return text;
                }
            }
        }
    })
    .await
    .expect("no event within two seconds")
}

#[tokio::test]
async fn test_broadcast_without_subscribers() {
    let tx = new_broadcast();
    let event = RealtimeEvent::new(POSTS_TOPIC, PostAction::Delete, json!({ "post": "gone" }));

    assert_eq!(broadcast_event(&tx, event), 0);
}

#[tokio::test]
async fn test_post_lifecycle_publishes_events() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada").await;
    let mut rx = app.state.realtime_broadcast.subscribe();

    let created = app
        .send_form(
            Method::POST,
            "/posts",
            MultipartForm::post("Live post", "Fresh off the press"),
            Some(&user.token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let post_id = created.json()["post"]["id"].as_str().unwrap().to_string();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.topic, POSTS_TOPIC);
    assert_eq!(event.action, PostAction::Create);
    assert_eq!(event.payload["post"]["id"], post_id.as_str());
    assert_eq!(event.payload["post"]["creator"]["name"], "Ada");

    let form = MultipartForm::new()
        .text("title", "Live post, edited")
        .text("content", "Fresh off the press")
        .text("image", created.json()["post"]["imageUrl"].as_str().unwrap());
    let updated = app
        .send_form(Method::PUT, &format!("/posts/{}", post_id), form, Some(&user.token))
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let event = rx.recv().await.unwrap();
    assert_eq!(event.action, PostAction::Update);
    assert_eq!(event.payload["post"]["title"], "Live post, edited");

    let deleted = app.delete(&format!("/posts/{}", post_id), Some(&user.token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let event = rx.recv().await.unwrap();
    assert_eq!(event.action, PostAction::Delete);
    assert_eq!(event.payload, json!({ "post": post_id }));
}

#[tokio::test]
async fn test_rejected_mutation_publishes_nothing() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada").await;
    let mut rx = app.state.realtime_broadcast.subscribe();

    let form = MultipartForm::new().text("title", "Live post").text("content", "No image");
    let response = app.send_form(Method::POST, "/posts", form, Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_sse_stream_delivers_events() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/realtime?topics=posts")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );

    let event = RealtimeEvent::new(POSTS_TOPIC, PostAction::Delete, json!({ "post": "abc" }));
    assert_eq!(broadcast_event(&app.state.realtime_broadcast, event), 1);

    let mut body = response.into_body();
    let frame = next_data_frame(&mut body).await;
    assert!(frame.contains("event: posts"), "{}", frame);
    assert!(frame.contains(r#""action":"delete""#), "{}", frame);
}

#[tokio::test]
async fn test_sse_topic_filter() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/realtime?topics=other")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let mut body = response.into_body();

    let skipped = RealtimeEvent::new(POSTS_TOPIC, PostAction::Create, json!({ "post": "one" }));
    let wanted = RealtimeEvent::new("other", PostAction::Update, json!({ "post": "two" }));
    broadcast_event(&app.state.realtime_broadcast, skipped);
    broadcast_event(&app.state.realtime_broadcast, wanted);

    let frame = next_data_frame(&mut body).await;
    assert!(frame.contains("event: other"), "{}", frame);
    assert!(frame.contains(r#""post":"two""#), "{}", frame);
}
