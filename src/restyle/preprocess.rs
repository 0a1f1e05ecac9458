// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! CPU-bound image preparation run before and after each generation call
//!
//! Everything here is synchronous; handlers run it on the blocking pool.

use image::{imageops::FilterType, DynamicImage, GrayImage};
use thiserror::Error;
use tracing::{info, warn};

use super::canvas::{synthetic_mask, SquareCanvas};
use super::image_data::{decode_base64_image, decode_image_bytes, encode_png, ImageDataError};
use super::sizing::{resolve_target_size, ImageSize, SizeError};

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error(transparent)]
    Image(#[from] ImageDataError),

    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Upload resized to the closest allowed engine size
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub original_png: Vec<u8>,
    pub engine_png: Vec<u8>,
    pub source: ImageSize,
    pub target: ImageSize,
}

/// Upload and mask placed on the square working canvas
#[derive(Debug, Clone)]
pub struct PreparedRegion {
    pub canvas: SquareCanvas,
    pub original_png: Vec<u8>,
    /// Mask at source size, as used (decoded or synthesized)
    pub mask_png: Vec<u8>,
    pub engine_png: Vec<u8>,
    pub engine_mask_png: Vec<u8>,
    pub synthetic_mask: bool,
}

/// Resize to the allowed size whose aspect ratio is closest to the source
pub fn resize_to_allowed(image: &DynamicImage) -> Result<(ImageSize, DynamicImage), SizeError> {
    let target = resolve_target_size(image.width(), image.height())?;
    info!(
        "Selected target size {} for {}x{} source",
        target,
        image.width(),
        image.height()
    );
    let resized = image.resize_exact(target.width, target.height, FilterType::Lanczos3);
    Ok((target, resized))
}

/// Decode a base64 upload and resize it for the image-to-image endpoint
pub fn prepare_resized(image_data: &str) -> Result<PreparedImage, PreprocessError> {
    let image = DynamicImage::ImageRgb8(decode_base64_image(image_data)?.to_rgb8());
    let source = ImageSize::new(image.width(), image.height());
    let original_png = encode_png(&image)?;

    let (target, resized) = resize_to_allowed(&image)?;
    let engine_png = encode_png(&resized)?;

    Ok(PreparedImage {
        original_png,
        engine_png,
        source,
        target,
    })
}

/// Decode the mask, or synthesize a centered disc if it cannot be decoded
pub fn decode_mask_or_fallback(mask_data: &str, width: u32, height: u32) -> (GrayImage, bool) {
    match decode_base64_image(mask_data) {
        Ok(mask) => (mask.to_luma8(), false),
        Err(e) => {
            warn!("Mask could not be decoded ({}); using centered circular mask", e);
            (synthetic_mask(width, height), true)
        }
    }
}

/// Decode upload and mask, then build the square working-resolution inputs
pub fn prepare_region(image_data: &str, mask_data: &str) -> Result<PreparedRegion, PreprocessError> {
    let image = DynamicImage::ImageRgb8(decode_base64_image(image_data)?.to_rgb8());
    if image.width() == 0 || image.height() == 0 {
        return Err(SizeError::ZeroDimension {
            width: image.width(),
            height: image.height(),
        }
        .into());
    }

    let (mask, synthetic) = decode_mask_or_fallback(mask_data, image.width(), image.height());
    let canvas = SquareCanvas::for_image(&image);

    let engine_image = DynamicImage::ImageRgb8(canvas.compose_image(&image));
    let engine_mask = DynamicImage::ImageLuma8(canvas.compose_mask(&mask));

    Ok(PreparedRegion {
        canvas,
        original_png: encode_png(&image)?,
        mask_png: encode_png(&DynamicImage::ImageLuma8(mask))?,
        engine_png: encode_png(&engine_image)?,
        engine_mask_png: encode_png(&engine_mask)?,
        synthetic_mask: synthetic,
    })
}

/// Map a generated square image back onto the original rectangle, as PNG
pub fn finish_region(canvas: &SquareCanvas, generated: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let generated = decode_image_bytes(generated)?;
    let restored = canvas.restore(&generated);
    Ok(encode_png(&restored)?)
}
