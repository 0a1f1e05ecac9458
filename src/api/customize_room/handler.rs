// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Free-text room customization handler

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, warn};

use super::request::CustomizeRoomRequest;
use crate::api::errors::{ApiError, ApiJson};
use crate::api::handlers::GenerationResponse;
use crate::api::http_server::AppState;
use crate::restyle::change_request::ChangeRequest;
use crate::restyle::client::GenerationParams;
use crate::restyle::preprocess::prepare_resized;
use crate::restyle::prompt::customize_prompt;
use crate::restyle::storage::{request_timestamp, ArtifactKind};

/// POST /api/customize-room
///
/// The prompt is parsed into a (part, color) change request and mapped to a
/// narrowly scoped instruction before the image-to-image call.
pub async fn customize_room_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CustomizeRoomRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let job = request.validate().map_err(|e| {
        warn!("Customization validation failed: {}", e);
        e
    })?;

    info!("Room customization requested: prompt={}", job.prompt);
    let change = ChangeRequest::parse(&job.prompt);
    info!(
        "Parsed change request: part={:?}, color={:?}",
        change.part, change.color
    );
    let timestamp = request_timestamp();

    let image_data = job.image_data;
    let prepared = tokio::task::spawn_blocking(move || prepare_resized(&image_data)).await??;

    let original = state
        .store
        .save(ArtifactKind::Original, timestamp, &prepared.original_png)
        .await?;
    state
        .store
        .save(ArtifactKind::Processed, timestamp, &prepared.engine_png)
        .await?;

    let prompts = customize_prompt(&change);
    info!("Generation prompt: {}", prompts.prompt);

    let params = GenerationParams::customization(prompts);
    let artifact = state
        .stability
        .image_to_image(prepared.engine_png, &params)
        .await?;

    let edited = state
        .store
        .save(ArtifactKind::Edited, timestamp, &artifact.image)
        .await?;

    info!(
        "Room customization complete: size={}, {}ms",
        prepared.target, artifact.processing_time_ms
    );

    Ok(Json(GenerationResponse {
        image_url: edited.url,
        original_url: original.url,
        message: "Room customization completed".to_string(),
    }))
}
