// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Whole-room style transform handler

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, warn};

use super::request::TransformStyleRequest;
use crate::api::errors::{ApiError, ApiJson};
use crate::api::handlers::GenerationResponse;
use crate::api::http_server::AppState;
use crate::restyle::client::GenerationParams;
use crate::restyle::preprocess::prepare_resized;
use crate::restyle::prompt::style_prompt;
use crate::restyle::storage::{request_timestamp, ArtifactKind};

/// POST /api/transform-room-style
///
/// Pipeline:
/// 1. Validate imageData and style (400 if missing)
/// 2. Decode and resize to the closest allowed engine size
/// 3. Store the original upload
/// 4. Build the style prompt and call image-to-image
/// 5. Store the result and return both URLs
pub async fn transform_style_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<TransformStyleRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let job = request.validate().map_err(|e| {
        warn!("Style transform validation failed: {}", e);
        e
    })?;

    info!("Room style transform requested: style={}", job.style);
    let timestamp = request_timestamp();

    let image_data = job.image_data;
    let prepared = tokio::task::spawn_blocking(move || prepare_resized(&image_data)).await??;

    let original = state
        .store
        .save(ArtifactKind::Original, timestamp, &prepared.original_png)
        .await?;

    let prompts = style_prompt(&job.style);
    info!("Generation prompt: {}", prompts.prompt);
    info!("Negative prompt: {}", prompts.negative_prompt);

    let params = GenerationParams::style_transfer(prompts);
    let artifact = state
        .stability
        .image_to_image(prepared.engine_png, &params)
        .await?;

    let styled = state
        .store
        .save(ArtifactKind::Styled, timestamp, &artifact.image)
        .await?;

    info!(
        "Room style transform complete: style={}, size={}, {}ms",
        job.style, prepared.target, artifact.processing_time_ms
    );

    Ok(Json(GenerationResponse {
        image_url: styled.url,
        original_url: original.url,
        message: "Room style transformation completed".to_string(),
    }))
}
