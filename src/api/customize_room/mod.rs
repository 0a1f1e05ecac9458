// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Free-text customization endpoint
//!
//! Provides POST /api/customize-room.

pub mod handler;
pub mod request;

pub use handler::customize_room_handler;
pub use request::CustomizeRoomRequest;
