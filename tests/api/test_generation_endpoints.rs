// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end generation flows against a fake Stability upstream

use axum::http::StatusCode;
use interior_restyle_node::restyle::{image_data::decode_image_bytes, styles::find_style};
use serde_json::json;

use super::helpers::{
    png_bytes, png_data_url, post_json, spawn_fake_stability, test_app, Upstream,
};

#[tokio::test]
async fn test_style_transform_success_stores_result() {
    let result_png = png_bytes(1152, 896);
    let fake = spawn_fake_stability(Upstream::Image(result_png.clone())).await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": png_data_url(400, 300), "style": "scandinavian"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let image_url = body["imageUrl"].as_str().unwrap();
    let original_url = body["originalUrl"].as_str().unwrap();
    assert!(image_url.starts_with("/generated-images/styled-"));
    assert!(original_url.starts_with("/generated-images/original-"));
    assert_eq!(std::fs::read(app.generated_path(image_url)).unwrap(), result_png);

    let original = std::fs::read(app.generated_path(original_url)).unwrap();
    let original = decode_image_bytes(&original).unwrap();
    assert_eq!((original.width(), original.height()), (400, 300));
}

#[tokio::test]
async fn test_scandinavian_prompt_carries_profile_text() {
    let fake = spawn_fake_stability(Upstream::Image(png_bytes(8, 8))).await;
    let app = test_app(&fake.base_url).await;

    let (status, _) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": png_data_url(64, 64), "style": "scandinavian"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let profile = find_style("scandinavian").unwrap();
    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .path
        .ends_with("/v1/generation/stable-diffusion-xl-1024-v1-0/image-to-image"));
    assert!(requests[0].body.contains(profile.colors));
    assert!(requests[0].body.contains(profile.materials));
    assert!(requests[0].body.contains("name=\"image_strength\""));
}

#[tokio::test]
async fn test_unknown_style_uses_simple_profile() {
    let fake = spawn_fake_stability(Upstream::Image(png_bytes(8, 8))).await;
    let app = test_app(&fake.base_url).await;

    let (status, _) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": png_data_url(64, 64), "style": "baroque"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let simple = find_style("simple").unwrap();
    assert!(fake.requests()[0].body.contains(simple.colors));
}

#[tokio::test]
async fn test_upstream_failure_returns_500_with_upstream_text() {
    let fake = spawn_fake_stability(Upstream::Failure(
        StatusCode::UNAUTHORIZED,
        r#"{"name":"unauthorized","message":"Invalid API key provided"}"#.to_string(),
    ))
    .await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-style",
        json!({"imageData": png_data_url(64, 48), "style": "hotel"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorType"], "generation_failed");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid API key provided"));
}

#[tokio::test]
async fn test_missing_artifacts_returns_500() {
    let fake = spawn_fake_stability(Upstream::NoArtifacts).await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"imageData": png_data_url(64, 48), "prompt": "床を茶色に"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("no image data"));
}

#[tokio::test]
async fn test_area_transform_restores_original_dimensions() {
    let fake = spawn_fake_stability(Upstream::Image(png_bytes(1024, 1024))).await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-area",
        json!({
            "imageData": png_data_url(300, 200),
            "maskData": png_data_url(300, 200),
            "prompt": "青いソファ"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let image_url = body["imageUrl"].as_str().unwrap();
    assert!(image_url.starts_with("/generated-images/masked-"));

    let result = std::fs::read(app.generated_path(image_url)).unwrap();
    let result = decode_image_bytes(&result).unwrap();
    assert_eq!((result.width(), result.height()), (300, 200));

    let requests = fake.requests();
    assert!(requests[0].path.ends_with("/image-to-image/masking"));
    assert!(requests[0].body.contains("MASK_IMAGE_WHITE"));
    assert!(requests[0]
        .body
        .contains("Change ONLY the masked area to: blueいsofa"));
}

#[tokio::test]
async fn test_area_transform_with_broken_mask_still_succeeds() {
    let fake = spawn_fake_stability(Upstream::Image(png_bytes(1024, 1024))).await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/transform-room-area",
        json!({
            "imageData": png_data_url(120, 160),
            "maskData": "data:image/png;base64,aGVsbG8=",
            "prompt": "wooden floor"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let image_url = body["imageUrl"].as_str().unwrap();
    let mask_url = image_url.replace("masked-", "mask-");
    let mask = std::fs::read(app.generated_path(&mask_url)).unwrap();
    let mask = decode_image_bytes(&mask).unwrap().to_luma8();
    assert_eq!(mask.dimensions(), (120, 160));
    assert_eq!(mask.get_pixel(60, 80).0, [255]);
    assert_eq!(mask.get_pixel(0, 0).0, [0]);
}

#[tokio::test]
async fn test_customize_sends_canned_instruction() {
    let fake = spawn_fake_stability(Upstream::Image(png_bytes(8, 8))).await;
    let app = test_app(&fake.base_url).await;

    let (status, body) = post_json(
        &app.router,
        "/api/customize-room",
        json!({"imageData": png_data_url(90, 160), "prompt": "壁を白に変更"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["imageUrl"]
        .as_str()
        .unwrap()
        .starts_with("/generated-images/edited-"));

    let sent = &fake.requests()[0].body;
    assert!(sent.contains(
        "SPECIFIC INSTRUCTION: Change ONLY the walls to white color. The walls should be white."
    ));
    assert!(sent.contains("different perspective"));
}
