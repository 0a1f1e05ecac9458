// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Flat directory of generated and intermediate PNGs
//!
//! Files are named `<kind>-<unix seconds>.png` and never cleaned up.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// URL prefix the output directory is served under
pub const GENERATED_URL_PREFIX: &str = "/generated-images";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a stored file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Original,
    Mask,
    Processed,
    ProcessedMask,
    Styled,
    Masked,
    Edited,
}

impl ArtifactKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Original => "original",
            ArtifactKind::Mask => "mask",
            ArtifactKind::Processed => "processed",
            ArtifactKind::ProcessedMask => "processed-mask",
            ArtifactKind::Styled => "styled",
            ArtifactKind::Masked => "masked",
            ArtifactKind::Edited => "edited",
        }
    }

    pub fn file_name(&self, timestamp: i64) -> String {
        format!("{}-{}.png", self.prefix(), timestamp)
    }
}

/// A file written to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: PathBuf,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

/// Seconds since the Unix epoch; shared by every file of one request
pub fn request_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    pub fn url_for(file_name: &str) -> String {
        format!("{}/{}", GENERATED_URL_PREFIX, file_name)
    }

    pub async fn save(
        &self,
        kind: ArtifactKind,
        timestamp: i64,
        bytes: &[u8],
    ) -> Result<StoredImage, StorageError> {
        let file_name = kind.file_name(timestamp);
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Saved {} image: {}", kind.prefix(), path.display());

        Ok(StoredImage {
            path,
            url: Self::url_for(&file_name),
        })
    }
}
