//! HTTP test utilities for guestbook integration tests.
//!
//! Provides a test app builder that mirrors the production router setup
//! on top of an isolated in-memory store.
#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde::Serialize;
use tower::ServiceExt;

use guestbook_service::{
    app::build_router, settings::Settings, storage::SignatureStore, test_support,
};

pub mod fixtures;

/// Builder for creating test routers with configurable store and settings.
pub struct TestAppBuilder {
    settings: Settings,
    store: Option<SignatureStore>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::for_tests()
                .with_public_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")),
            store: None,
        }
    }

    /// Share a store with the test so it can inspect or pre-populate it.
    pub fn with_store(mut self, store: SignatureStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings = self.settings.with_public_dir(dir);
        self
    }

    pub fn with_body_limit_bytes(mut self, bytes: usize) -> Self {
        self.settings = self.settings.with_body_limit_bytes(bytes);
        self
    }

    pub fn build(self) -> Router {
        let store = self
            .store
            .unwrap_or_else(test_support::store::in_memory_store);
        build_router(&self.settings, store)
    }
}

/// Create a test router over a fresh in-memory store.
pub fn test_app() -> Router {
    TestAppBuilder::new().build()
}

/// Create a test router over the given store.
pub fn test_app_with_store(store: SignatureStore) -> Router {
    TestAppBuilder::new().with_store(store).build()
}

/// Send a request with an optional JSON body.
pub async fn send<T: Serialize>(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&T>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Send a request without a body.
pub async fn send_empty(app: &Router, method: &str, uri: &str) -> Response {
    send::<()>(app, method, uri, None).await
}

/// Helper to parse JSON response body.
pub async fn parse_json_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Helper to get response status and body as string (for debugging).
pub async fn response_debug(response: Response) -> (StatusCode, String) {
    use http_body_util::BodyExt;

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body).to_string();
    (status, text)
}
