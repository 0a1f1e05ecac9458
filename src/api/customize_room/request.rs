// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /api/customize-room
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeRoomRequest {
    #[serde(default)]
    pub image_data: Option<String>,

    /// Free-text change request, e.g. "壁を白に変更"
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomizeJob {
    pub image_data: String,
    pub prompt: String,
}

impl CustomizeRoomRequest {
    pub fn validate(self) -> Result<CustomizeJob, ApiError> {
        let image_data = ApiError::require(self.image_data, "imageData")?;
        let prompt = ApiError::require(self.prompt.filter(|p| !p.trim().is_empty()), "prompt")?;
        Ok(CustomizeJob { image_data, prompt })
    }
}
