// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Room photo restyling via the Stability AI image-to-image API

pub mod canvas;
pub mod change_request;
pub mod client;
pub mod image_data;
pub mod preprocess;
pub mod prompt;
pub mod sizing;
pub mod storage;
pub mod styles;
pub mod translate;

pub use canvas::{synthetic_mask, SquareCanvas};
pub use change_request::{ChangeRequest, RoomPart};
pub use client::{GeneratedArtifact, GenerationParams, StabilityClient, StabilityError};
pub use image_data::ImageDataError;
pub use preprocess::{PreparedImage, PreparedRegion, PreprocessError};
pub use prompt::PromptPair;
pub use sizing::{resolve_target_size, ImageSize, SizeError, ALLOWED_SIZES};
pub use storage::{ArtifactKind, OutputStore, StorageError, StoredImage};
pub use styles::{resolve_style, StyleProfile, StyleSummary};
