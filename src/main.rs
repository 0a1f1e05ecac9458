// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use interior_restyle_node::{api::start_server, version, ServerArgs, ServerConfig};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());

    let config = ServerConfig::from_args(ServerArgs::parse());
    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {}", e))?;

    info!(
        "Environment: {}",
        if config.production { "production" } else { "local" }
    );

    start_server(config).await
}
