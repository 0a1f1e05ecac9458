// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::restyle::styles::{style_summaries, StyleSummary};

/// Successful result of any of the three generation endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// URL of the generated image under /generated-images
    pub image_url: String,
    /// URL of the uploaded photo as stored alongside it
    pub original_url: String,
    pub message: String,
}

/// GET /health, with build and feature info
pub async fn health_handler() -> Json<serde_json::Value> {
    let mut body = crate::version::get_version_info();
    body["status"] = serde_json::json!("healthy");
    Json(body)
}

/// GET /api/room-styles
pub async fn room_styles_handler() -> Json<Vec<StyleSummary>> {
    Json(style_summaries())
}
