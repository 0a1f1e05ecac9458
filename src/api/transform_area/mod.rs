// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Masked region edit endpoint
//!
//! Provides POST /api/transform-room-area.

pub mod handler;
pub mod request;

pub use handler::transform_area_handler;
pub use request::TransformAreaRequest;
