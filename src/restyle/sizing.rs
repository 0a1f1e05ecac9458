// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Aspect-ratio bucketing onto the sizes accepted by the generation engine

use thiserror::Error;

/// Input sizes accepted by the SDXL image-to-image engine, in preference order.
pub const ALLOWED_SIZES: [ImageSize; 9] = [
    ImageSize::new(1024, 1024),
    ImageSize::new(1152, 896),
    ImageSize::new(1216, 832),
    ImageSize::new(1344, 768),
    ImageSize::new(1536, 640),
    ImageSize::new(640, 1536),
    ImageSize::new(768, 1344),
    ImageSize::new(832, 1216),
    ImageSize::new(896, 1152),
];

/// Side length of the square canvas sent for masked edits
pub const WORKING_RESOLUTION: u32 = 1024;

#[derive(Debug, Error, PartialEq)]
pub enum SizeError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Absolute difference between this size's aspect ratio and `ratio`
    pub fn ratio_difference(&self, ratio: f64) -> f64 {
        (self.aspect_ratio() - ratio).abs()
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pick the allowed size whose aspect ratio is closest to `width / height`.
///
/// Ties keep the earliest entry of [`ALLOWED_SIZES`].
pub fn resolve_target_size(width: u32, height: u32) -> Result<ImageSize, SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::ZeroDimension { width, height });
    }

    let source_ratio = width as f64 / height as f64;
    let mut best = ALLOWED_SIZES[0];
    let mut best_diff = best.ratio_difference(source_ratio);

    for candidate in ALLOWED_SIZES.iter().skip(1) {
        let diff = candidate.ratio_difference(source_ratio);
        if diff < best_diff {
            best = *candidate;
            best_diff = diff;
        }
    }

    Ok(best)
}
