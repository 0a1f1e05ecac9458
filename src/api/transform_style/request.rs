// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /api/transform-room-style
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformStyleRequest {
    /// Room photo, raw base64 or a data URL
    #[serde(default)]
    pub image_data: Option<String>,

    /// Style id from GET /api/room-styles; unknown ids use "simple"
    #[serde(default)]
    pub style: Option<String>,
}

/// Validated request fields
#[derive(Debug, Clone, PartialEq)]
pub struct StyleJob {
    pub image_data: String,
    pub style: String,
}

impl TransformStyleRequest {
    pub fn validate(self) -> Result<StyleJob, ApiError> {
        let image_data = ApiError::require(self.image_data, "imageData")?;
        let style = ApiError::require(self.style, "style")?;
        Ok(StyleJob { image_data, style })
    }
}
