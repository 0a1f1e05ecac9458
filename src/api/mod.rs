// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod customize_room;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod transform_area;
pub mod transform_style;

pub use customize_room::{customize_room_handler, CustomizeRoomRequest};
pub use errors::{ApiError, ApiJson, ErrorResponse};
pub use handlers::GenerationResponse;
pub use http_server::{create_app, start_server, AppState};
pub use transform_area::{transform_area_handler, TransformAreaRequest};
pub use transform_style::{transform_style_handler, TransformStyleRequest};
