//! Authentication API integration tests
//!
//! Tests for signup, login, the bearer-token gate and the status endpoints.

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use quillfeed::backend::auth::password::verify_password;
use quillfeed::backend::auth::sessions::{create_token, verify_token, TokenKeys};
use quillfeed::backend::auth::users::{get_user_by_email, get_user_by_id, DEFAULT_STATUS};
use quillfeed::shared::config::TOKEN_TTL;

use crate::common::{create_test_user, generate_test_token, login, signup, TestApp};
use crate::{assert_error_body, assert_ok};

const VALIDATION_MESSAGE: &str = "Validation failed, entered data is incorrect.";

#[tokio::test]
async fn test_signup_then_login() {
    let app = TestApp::new().await;

    let user_id = signup(&app, "ada@example.com", "Ada", "lovelace").await;
    let token = login(&app, "ada@example.com", "lovelace").await;

    let claims = assert_ok!(verify_token(&token, &app.state.token_keys));
    assert_eq!(claims.user_uuid(), Some(user_id));
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL.as_secs());
}

#[tokio::test]
async fn test_signup_response_shape() {
    let app = TestApp::new().await;

    let response = app
        .send_json(
            Method::PUT,
            "/signup",
            json!({ "email": "ada@example.com", "name": "Ada", "password": "lovelace" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["message"], "User created!");
    assert!(body["userId"].is_string());
}

#[tokio::test]
async fn test_signup_stores_hash_and_defaults() {
    let app = TestApp::new().await;
    signup(&app, "  Ada@Example.COM ", " Ada ", " lovelace ").await;

    let user = get_user_by_email(&app.state.db, "ada@example.com")
        .await
        .unwrap()
        .expect("email is stored lower-cased");

    assert_ne!(user.password, " lovelace ");
    assert!(verify_password(" lovelace ".to_string(), user.password.clone()).await);
    assert!(!verify_password("lovelace".to_string(), user.password.clone()).await);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.status, DEFAULT_STATUS);
    assert!(user.posts.is_empty());
}

#[tokio::test]
async fn test_signup_reports_every_invalid_field() {
    let app = TestApp::new().await;

    let response = app
        .send_json(
            Method::PUT,
            "/signup",
            json!({ "email": "not-an-email", "name": "   ", "password": " abcd " }),
            None,
        )
        .await;

    assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY, VALIDATION_MESSAGE);
    let fields: Vec<String> = response.json()["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["email", "name", "password"]);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada", "lovelace").await;

    let response = app
        .send_json(
            Method::PUT,
            "/signup",
            json!({ "email": "ADA@example.com", "name": "Imposter", "password": "another" }),
            None,
        )
        .await;

    assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY, VALIDATION_MESSAGE);
    assert_eq!(
        response.json()["data"],
        json!([{ "field": "email", "message": "E-Mail address already exists!" }])
    );
}

#[tokio::test]
async fn test_signup_malformed_json_is_validation_error() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["statusCode"], 422);
    assert!(response.json()["data"].is_array());
}

#[tokio::test]
async fn test_password_with_surrounding_spaces_round_trips() {
    let app = TestApp::new().await;
    let user_id = signup(&app, "ada@example.com", "Ada", " secret1 ").await;

    let token = login(&app, "ada@example.com", " secret1 ").await;
    let claims = assert_ok!(verify_token(&token, &app.state.token_keys));
    assert_eq!(claims.user_uuid(), Some(user_id));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada", "lovelace").await;

    let wrong_password = app
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "ada@example.com", "password": "babbage" }),
            None,
        )
        .await;
    let unknown_email = app
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "nobody@example.com", "password": "lovelace" }),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json(), unknown_email.json());
    assert!(wrong_password.json().get("token").is_none());
}

#[tokio::test]
async fn test_login_normalizes_email() {
    let app = TestApp::new().await;
    let user_id = signup(&app, "ada@example.com", "Ada", "lovelace").await;

    let response = app
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "  ADA@example.com", "password": "lovelace" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["userId"], user_id.to_string());
}

#[tokio::test]
async fn test_status_requires_bearer_token() {
    let app = TestApp::new().await;

    let missing = app.get("/status", None).await;
    assert_error_body!(missing, StatusCode::UNAUTHORIZED, "Not authenticated.");

    let garbage = app.get("/status", Some("not.a.token")).await;
    assert_error_body!(garbage, StatusCode::UNAUTHORIZED, "Not authenticated.");

    for value in ["Basic YWRhOmxvdmVsYWNl", "Bearer ", "Bearer    "] {
        let request = Request::builder()
            .uri("/status")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();
        let response = app.send(request).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header {:?}", value);
    }
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada").await;

    let foreign_keys = TokenKeys::new("some-other-secret", TOKEN_TTL);
    let forged = create_token(user.id, &user.email, &foreign_keys).unwrap();

    let response = app.get("/status", Some(&forged)).await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED, "Not authenticated.");
}

#[tokio::test]
async fn test_status_round_trip() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada").await;

    let initial = app.get("/status", Some(&user.token)).await;
    assert_eq!(initial.status, StatusCode::OK);
    assert_eq!(initial.json()["status"], DEFAULT_STATUS);

    let update = app
        .send_json(
            Method::POST,
            "/status",
            json!({ "status": "  Writing a novel  " }),
            Some(&user.token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.json()["message"], "User status updated successfully");

    let fetched = app.get("/status", Some(&user.token)).await;
    assert_eq!(
        fetched.json(),
        json!({ "message": "User status fetched successfully", "status": "Writing a novel" })
    );

    let stored = get_user_by_id(&app.state.db, user.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "Writing a novel");
}

#[tokio::test]
async fn test_empty_status_is_rejected() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada").await;

    let response = app
        .send_json(Method::POST, "/status", json!({ "status": "   " }), Some(&user.token))
        .await;

    assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY, VALIDATION_MESSAGE);
    assert_eq!(response.json()["data"][0]["field"], "status");
}

#[tokio::test]
async fn test_status_for_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let token = generate_test_token(&app, Uuid::new_v4(), "ghost@example.com");

    let read = app.get("/status", Some(&token)).await;
    assert_error_body!(read, StatusCode::NOT_FOUND, "User not found.");

    let write = app
        .send_json(Method::POST, "/status", json!({ "status": "Boo" }), Some(&token))
        .await;
    assert_error_body!(write, StatusCode::NOT_FOUND, "User not found.");
}
