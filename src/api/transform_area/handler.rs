// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Masked region edit handler

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::request::TransformAreaRequest;
use crate::api::errors::{ApiError, ApiJson};
use crate::api::handlers::GenerationResponse;
use crate::api::http_server::AppState;
use crate::restyle::client::GenerationParams;
use crate::restyle::preprocess::{finish_region, prepare_region};
use crate::restyle::prompt::region_prompt;
use crate::restyle::storage::{request_timestamp, ArtifactKind};
use crate::restyle::translate::translate_room_terms;

/// POST /api/transform-room-area
///
/// The photo and mask are centered on a square canvas at the working
/// resolution for the masking endpoint; the result is mapped back onto the
/// original rectangle before it is stored.
pub async fn transform_area_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<TransformAreaRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let job = request.validate().map_err(|e| {
        warn!("Area transform validation failed: {}", e);
        e
    })?;

    info!("Room area transform requested: prompt={}", job.prompt);
    let translated = translate_room_terms(&job.prompt);
    let timestamp = request_timestamp();

    debug!(
        "Area transform payload sizes: image={} chars, mask={} chars",
        job.image_data.len(),
        job.mask_data.len()
    );
    let (image_data, mask_data) = (job.image_data, job.mask_data);
    let prepared =
        tokio::task::spawn_blocking(move || prepare_region(&image_data, &mask_data)).await??;

    let original = state
        .store
        .save(ArtifactKind::Original, timestamp, &prepared.original_png)
        .await?;
    state
        .store
        .save(ArtifactKind::Mask, timestamp, &prepared.mask_png)
        .await?;
    state
        .store
        .save(ArtifactKind::Processed, timestamp, &prepared.engine_png)
        .await?;
    state
        .store
        .save(ArtifactKind::ProcessedMask, timestamp, &prepared.engine_mask_png)
        .await?;

    let prompts = region_prompt(&translated);
    info!("Generation prompt: {}", prompts.prompt);

    let params = GenerationParams::region_edit(prompts);
    let canvas = prepared.canvas;
    let artifact = state
        .stability
        .image_to_image_masked(prepared.engine_png, prepared.engine_mask_png, &params)
        .await?;

    let generated = artifact.image;
    let final_png =
        tokio::task::spawn_blocking(move || finish_region(&canvas, &generated)).await??;

    let masked = state
        .store
        .save(ArtifactKind::Masked, timestamp, &final_png)
        .await?;

    info!(
        "Room area transform complete: {}x{}, synthetic_mask={}, {}ms",
        canvas.width, canvas.height, prepared.synthetic_mask, artifact.processing_time_ms
    );

    Ok(Json(GenerationResponse {
        image_url: masked.url,
        original_url: original.url,
        message: "Room area transformation completed".to_string(),
    }))
}
