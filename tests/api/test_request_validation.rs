// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Missing-field and undecodable-image handling on every generation endpoint

use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{offline_app, png_data_url, post_json, post_raw};

#[tokio::test]
async fn test_style_transform_missing_image_returns_400() {
    let app = offline_app().await;
    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"style": "scandinavian"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "imageData is required");
    assert_eq!(body["errorType"], "missing_field");
}

#[tokio::test]
async fn test_style_transform_missing_style_returns_400() {
    let app = offline_app().await;
    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": png_data_url(8, 8)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "style is required");
}

#[tokio::test]
async fn test_area_transform_missing_fields_return_400() {
    let app = offline_app().await;

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-area",
        json!({"maskData": "x", "prompt": "sofa"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "imageData is required");

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-area",
        json!({"imageData": png_data_url(8, 8), "prompt": "sofa"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "maskData is required");

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-area",
        json!({"imageData": png_data_url(8, 8), "maskData": png_data_url(8, 8)}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "prompt is required");
}

#[tokio::test]
async fn test_customize_missing_prompt_returns_400() {
    let app = offline_app().await;

    let (status, _) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"imageData": png_data_url(8, 8)}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"imageData": png_data_url(8, 8), "prompt": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "prompt is required");
}

#[tokio::test]
async fn test_customize_missing_image_returns_400() {
    let app = offline_app().await;
    let (status, _) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"prompt": "壁を白に"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_undecodable_image_returns_500() {
    let app = offline_app().await;
    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": "data:image/png;base64,aGVsbG8gd29ybGQ=", "style": "hotel"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorType"], "image_processing_failed");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Unsupported image format"));
}

#[tokio::test]
async fn test_invalid_base64_image_returns_500() {
    let app = offline_app().await;
    let (status, body) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"imageData": "%%%not-base64%%%", "prompt": "床を白に"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorType"], "image_processing_failed");
}

#[tokio::test]
async fn test_wrong_field_type_returns_json_error() {
    let app = offline_app().await;
    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": 5, "style": "hotel"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "invalid_request");
    assert!(body["error"].as_str().unwrap().contains("imageData"));
}

#[tokio::test]
async fn test_non_json_body_returns_json_error() {
    let app = offline_app().await;
    let (status, body) = post_raw(
        &app.router,
        "/api/customize-room",
        Some("application/json"),
        "imageData=abc&prompt=wall",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "invalid_request");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_returns_json_error() {
    let app = offline_app().await;
    let (status, body) = post_raw(
        &app.router,
        "/api/transform-room-area",
        None,
        r#"{"imageData": "x", "maskData": "y", "prompt": "sofa"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "invalid_request");
}
