// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Square-canvas compositing for masked region edits
//!
//! The masking endpoint only accepts square inputs at the working resolution.
//! The source photo and its mask are centered on a square canvas whose side is
//! the larger source dimension, scaled to the working resolution, and the
//! generated result is scaled back and cropped to the original rectangle.

use image::{
    imageops::{self, FilterType},
    DynamicImage, GrayImage, Luma, Rgb, RgbImage,
};

use super::sizing::WORKING_RESOLUTION;

const CANVAS_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const MASK_KEEP: Luma<u8> = Luma([0]);
const MASK_EDIT: Luma<u8> = Luma([255]);

/// Geometry of one source image placed on a square canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareCanvas {
    pub width: u32,
    pub height: u32,
    pub side: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl SquareCanvas {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let side = width.max(height);
        Self {
            width,
            height,
            side,
            offset_x: (side - width) / 2,
            offset_y: (side - height) / 2,
        }
    }

    pub fn for_image(image: &DynamicImage) -> Self {
        Self::for_dimensions(image.width(), image.height())
    }

    /// Center the photo on a white square and scale it to the working resolution
    pub fn compose_image(&self, image: &DynamicImage) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(self.side, self.side, CANVAS_BACKGROUND);
        imageops::replace(
            &mut canvas,
            &image.to_rgb8(),
            self.offset_x as i64,
            self.offset_y as i64,
        );
        imageops::resize(
            &canvas,
            WORKING_RESOLUTION,
            WORKING_RESOLUTION,
            FilterType::Lanczos3,
        )
    }

    /// Center the mask on a black square and scale it to the working resolution.
    ///
    /// Padding stays black so only the photo area can be edited.
    pub fn compose_mask(&self, mask: &GrayImage) -> GrayImage {
        let mut canvas = GrayImage::from_pixel(self.side, self.side, MASK_KEEP);
        imageops::replace(&mut canvas, mask, self.offset_x as i64, self.offset_y as i64);
        imageops::resize(
            &canvas,
            WORKING_RESOLUTION,
            WORKING_RESOLUTION,
            FilterType::Lanczos3,
        )
    }

    /// Undo the canvas transform on a generated image
    pub fn restore(&self, generated: &DynamicImage) -> DynamicImage {
        generated
            .resize_exact(self.side, self.side, FilterType::Lanczos3)
            .crop_imm(self.offset_x, self.offset_y, self.width, self.height)
    }
}

/// Fallback mask: black with a white disc in the middle.
///
/// The disc is centered at `(width / 2, height / 2)` with radius
/// `min(width, height) / 4`.
pub fn synthetic_mask(width: u32, height: u32) -> GrayImage {
    let cx = (width / 2) as i64;
    let cy = (height / 2) as i64;
    let radius = (width.min(height) / 4) as i64;
    let radius_sq = radius * radius;

    GrayImage::from_fn(width, height, |x, y| {
        let dx = x as i64 - cx;
        let dy = y as i64 - cy;
        if dx * dx + dy * dy <= radius_sq {
            MASK_EDIT
        } else {
            MASK_KEEP
        }
    })
}
