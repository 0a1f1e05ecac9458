// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Decoding uploaded images and encoding PNG output

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

/// Maximum decoded upload size (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageDataError {
    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode PNG: {0}")]
    EncodeFailed(String),

    #[error("Image data is empty")]
    EmptyData,
}

/// Strip an optional `data:<mime>;base64,` prefix
pub fn strip_data_url(data: &str) -> &str {
    match data.split_once(',') {
        Some((_, payload)) => payload,
        None => data,
    }
}

/// Decode base64 (raw or data URL) into bytes; line breaks are ignored
pub fn decode_base64_payload(data: &str) -> Result<Vec<u8>, ImageDataError> {
    let payload: String = strip_data_url(data)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if payload.is_empty() {
        return Err(ImageDataError::EmptyData);
    }

    let bytes = STANDARD.decode(&payload)?;
    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(ImageDataError::TooLarge(bytes.len(), MAX_IMAGE_SIZE));
    }
    if bytes.is_empty() {
        return Err(ImageDataError::EmptyData);
    }
    Ok(bytes)
}

/// Decode raw image bytes, detecting the format from magic bytes
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DynamicImage, ImageDataError> {
    let format = detect_format(bytes)?;
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ImageDataError::DecodeFailed(e.to_string()))
}

/// Decode a base64 upload straight into an image
pub fn decode_base64_image(data: &str) -> Result<DynamicImage, ImageDataError> {
    let bytes = decode_base64_payload(data)?;
    decode_image_bytes(&bytes)
}

pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, ImageDataError> {
    if bytes.len() < 4 {
        return Err(ImageDataError::UnsupportedFormat);
    }

    match bytes {
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Ok(ImageFormat::WebP),

        // GIF87a / GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Ok(ImageFormat::Gif),

        [0x42, 0x4D, ..] => Ok(ImageFormat::Bmp),

        _ => Err(ImageDataError::UnsupportedFormat),
    }
}

/// Encode any image as PNG bytes
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImageDataError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ImageDataError::EncodeFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}
