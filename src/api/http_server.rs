// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::customize_room::customize_room_handler;
use super::handlers::{health_handler, room_styles_handler};
use super::transform_area::transform_area_handler;
use super::transform_style::transform_style_handler;
use crate::config::ServerConfig;
use crate::restyle::storage::{OutputStore, GENERATED_URL_PREFIX};
use crate::restyle::StabilityClient;

/// Shared state handed to every request handler
pub struct AppState {
    pub stability: StabilityClient,
    pub store: OutputStore,
    /// Static front-end files served for unmatched paths
    pub public_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        stability: StabilityClient,
        store: OutputStore,
        public_dir: impl Into<PathBuf>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            stability,
            store,
            public_dir: public_dir.into(),
            max_body_bytes,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let stability = StabilityClient::new(
            &config.stability_api_key,
            &config.stability_base_url,
            &config.stability_engine_id,
            config.request_timeout,
        )?;
        Ok(Self::new(
            stability,
            OutputStore::new(&config.output_dir),
            &config.public_dir,
            config.max_body_bytes,
        ))
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    let generated = ServeDir::new(state.store.dir());
    let public = ServeDir::new(&state.public_dir);
    let body_limit = state.max_body_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/room-styles", get(room_styles_handler))
        .route("/api/transform-room-style", post(transform_style_handler))
        .route("/api/transform-room-area", post(transform_area_handler))
        .route("/api/customize-room", post(customize_room_handler))
        .nest_service(GENERATED_URL_PREFIX, generated)
        .fallback_service(public)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    state.store.ensure_dir().await?;
    tokio::fs::create_dir_all(config.styles_dir()).await?;
    info!("Generated images directory: {}", state.store.dir().display());

    let app = create_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Interior restyle server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
