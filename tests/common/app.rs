//! In-process test application
//!
//! `TestApp` owns the state and router of a fresh server. Requests go
//! through `tower::ServiceExt::oneshot`, so every test gets its own
//! database and nothing listens on a port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use quillfeed::backend::error::BackendError;
use quillfeed::backend::feed::{ImageStorage, ImageUpload};
use quillfeed::backend::routes::create_router;
use quillfeed::backend::server::database::connect_in_memory;
use quillfeed::backend::AppState;
use quillfeed::shared::AppConfig;

use super::multipart::MultipartForm;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Image storage that records calls instead of touching the disk
#[derive(Debug, Default)]
pub struct RecordingImageStorage {
    stored: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
}

impl RecordingImageStorage {
    /// References handed out by `store`, in order
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }

    /// References passed to `remove`, in order
    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn store(&self, upload: ImageUpload) -> Result<String, BackendError> {
        let reference = format!("images/{}-{}", Uuid::new_v4(), upload.file_name);
        self.stored.lock().unwrap().push(reference.clone());
        Ok(reference)
    }

    async fn remove(&self, image_url: &str) -> Result<(), BackendError> {
        self.removed.lock().unwrap().push(image_url.to_string());
        Ok(())
    }
}

/// Status and raw body of a routed request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A fresh application
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub images: Arc<RecordingImageStorage>,
    pub image_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let image_dir = tempfile::tempdir().unwrap();
        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .database_url("sqlite::memory:")
            .image_dir(image_dir.path())
            .bcrypt_cost(4)
            .build()
            .unwrap();

        let db = connect_in_memory().await.unwrap();
        let images = Arc::new(RecordingImageStorage::default());
        let state = AppState::new(config, db, images.clone());
        let router = create_router(state.clone());

        Self {
            state,
            router,
            images,
            image_dir,
        }
    }

    /// Route one request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::GET, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::DELETE, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
        token: Option<&str>,
    ) -> TestResponse {
        let request = request(method, uri, token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send_form(
        &self,
        method: Method,
        uri: &str,
        form: MultipartForm,
        token: Option<&str>,
    ) -> TestResponse {
        let request = request(method, uri, token)
            .header(header::CONTENT_TYPE, MultipartForm::content_type())
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(request).await
    }

    /// Wait until background image removals have reached `count`
    pub async fn wait_for_removals(&self, count: usize) -> Vec<String> {
        for _ in 0..100 {
            let removed = self.images.removed();
            if removed.len() >= count {
                return removed;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.images.removed()
    }

    /// Let spawned tasks run, then report every removal seen so far
    pub async fn settled_removals(&self) -> Vec<String> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.images.removed()
    }
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, super::auth_header(token)),
        None => builder,
    }
}
