// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /api/transform-room-area
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformAreaRequest {
    #[serde(default)]
    pub image_data: Option<String>,

    /// Black/white mask; white marks the area to change
    #[serde(default)]
    pub mask_data: Option<String>,

    /// What the masked area should become (Japanese or English)
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaJob {
    pub image_data: String,
    pub mask_data: String,
    pub prompt: String,
}

impl TransformAreaRequest {
    pub fn validate(self) -> Result<AreaJob, ApiError> {
        let image_data = ApiError::require(self.image_data, "imageData")?;
        let mask_data = ApiError::require(self.mask_data, "maskData")?;
        let prompt = ApiError::require(self.prompt, "prompt")?;
        Ok(AreaJob {
            image_data,
            mask_data,
            prompt,
        })
    }
}
