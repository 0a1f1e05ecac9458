// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};

use crate::restyle::{ImageDataError, PreprocessError, StabilityError, StorageError};

/// JSON body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// `Json` extractor whose rejections render as [`ErrorResponse`]
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    MissingField { field: String },
    ImageProcessing(String),
    Generation(String),
    Storage(String),
    InternalError(String),
}

impl ApiError {
    pub fn missing(field: &str) -> Self {
        ApiError::MissingField {
            field: field.to_string(),
        }
    }

    /// Unwrap a required request field; absent and empty both count as missing
    pub fn require(value: Option<String>, field: &str) -> Result<String, ApiError> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(Self::missing(field)),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::MissingField { .. } => "missing_field",
            ApiError::ImageProcessing(_) => "image_processing_failed",
            ApiError::Generation(_) => "generation_failed",
            ApiError::Storage(_) => "storage_failed",
            ApiError::InternalError(_) => "internal_error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            error_type: self.error_type().to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::MissingField { .. } => 400,
            ApiError::ImageProcessing(_)
            | ApiError::Generation(_)
            | ApiError::Storage(_)
            | ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request body: {}", msg),
            ApiError::MissingField { field } => write!(f, "{} is required", field),
            ApiError::ImageProcessing(msg) => write!(f, "Image processing failed: {}", msg),
            ApiError::Generation(msg) => write!(f, "Image generation failed: {}", msg),
            ApiError::Storage(msg) => write!(f, "Failed to save image: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body ({}): {}", rejection.status(), rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<ImageDataError> for ApiError {
    fn from(e: ImageDataError) -> Self {
        ApiError::ImageProcessing(e.to_string())
    }
}

impl From<PreprocessError> for ApiError {
    fn from(e: PreprocessError) -> Self {
        ApiError::ImageProcessing(e.to_string())
    }
}

impl From<StabilityError> for ApiError {
    fn from(e: StabilityError) -> Self {
        ApiError::Generation(e.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::InternalError(format!("image task failed: {}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}
