// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared fixtures: a fake Stability upstream and a router wired against it
#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, Rgb, RgbImage};
use interior_restyle_node::{
    api::{create_app, AppState},
    restyle::{
        client::DEFAULT_ENGINE_ID, image_data::encode_png, OutputStore, StabilityClient,
    },
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// How the fake upstream answers every request
#[derive(Clone)]
pub enum Upstream {
    /// 200 with one artifact holding this PNG
    Image(Vec<u8>),
    /// Non-success status with a plain error body
    Failure(StatusCode, String),
    /// 200 with an empty artifacts list
    NoArtifacts,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    /// Multipart body decoded lossily; text fields are readable as-is
    pub body: String,
}

#[derive(Clone)]
struct FakeState {
    behavior: Upstream,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeStability {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeStability {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn fake_generation(State(state): State<FakeState>, uri: Uri, body: Bytes) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.behavior {
        Upstream::Image(png) => Json(serde_json::json!({
            "artifacts": [{
                "base64": STANDARD.encode(png),
                "seed": 1234,
                "finishReason": "SUCCESS"
            }]
        }))
        .into_response(),
        Upstream::Failure(status, text) => (status, text).into_response(),
        Upstream::NoArtifacts => Json(serde_json::json!({ "artifacts": [] })).into_response(),
    }
}

pub async fn spawn_fake_stability(behavior: Upstream) -> FakeStability {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(fake_generation).with_state(FakeState {
        behavior,
        requests: requests.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    FakeStability {
        base_url: format!("http://{}", addr),
        requests,
    }
}

/// Router plus the temp directory backing its output store
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn generated_path(&self, url: &str) -> std::path::PathBuf {
        let file_name = url.trim_start_matches("/generated-images/");
        self.dir.path().join("public/generated-images").join(file_name)
    }
}

pub async fn test_app(base_url: &str) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let public_dir = dir.path().join("public");
    let store = OutputStore::new(public_dir.join("generated-images"));
    store.ensure_dir().await.unwrap();

    let client =
        StabilityClient::new("sk-test", base_url, DEFAULT_ENGINE_ID, Duration::from_secs(10))
            .unwrap();
    let state = AppState::new(client, store, public_dir, 20 * 1024 * 1024);

    TestApp {
        router: create_app(Arc::new(state)),
        dir,
    }
}

/// App whose upstream is never reached (validation tests)
pub async fn offline_app() -> TestApp {
    test_app("http://127.0.0.1:9").await
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([120, 90, 60])));
    encode_png(&image).unwrap()
}

pub fn png_data_url(width: u32, height: u32) -> String {
    format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png_bytes(width, height))
    )
}

pub async fn post_json(
    router: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// POST an arbitrary body, optionally without a content type
pub async fn post_raw(
    router: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(router, request).await
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
