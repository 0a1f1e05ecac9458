// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Whole-room style transform endpoint
//!
//! Provides POST /api/transform-room-style.

pub mod handler;
pub mod request;

pub use handler::transform_style_handler;
pub use request::TransformStyleRequest;
