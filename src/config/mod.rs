// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration from command-line flags and environment variables

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::restyle::client::{DEFAULT_BASE_URL, DEFAULT_ENGINE_ID};

const LOCAL_HOST: &str = "127.0.0.1";
const PRODUCTION_HOST: &str = "0.0.0.0";

/// Interior restyle server
#[derive(Parser, Debug, Clone)]
#[command(name = "interior-restyle-node")]
#[command(version)]
#[command(about = "Restyles room photos through the Stability AI image-to-image API", long_about = None)]
pub struct ServerArgs {
    /// Stability AI API key
    #[arg(long, env = "STABILITY_API_KEY", hide_env_values = true)]
    pub stability_api_key: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Bind host; overrides the production/local default
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Set by the hosting platform in production; switches the bind host to 0.0.0.0
    #[arg(long = "production", env = "RENDER")]
    pub render: Option<String>,

    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Defaults to <public-dir>/generated-images
    #[arg(long, env = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, env = "STABILITY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub stability_base_url: String,

    #[arg(long, env = "STABILITY_ENGINE_ID", default_value = DEFAULT_ENGINE_ID)]
    pub stability_engine: String,

    #[arg(long, env = "STABILITY_TIMEOUT_SECS", default_value_t = 120)]
    pub request_timeout_secs: u64,

    /// Request body limit in megabytes
    #[arg(long, env = "MAX_BODY_MB", default_value_t = 20)]
    pub max_body_mb: usize,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub stability_api_key: String,
    pub host: String,
    pub port: u16,
    pub production: bool,
    pub public_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stability_base_url: String,
    pub stability_engine_id: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Local-development defaults around the given API key
    pub fn new(stability_api_key: impl Into<String>) -> Self {
        let public_dir = PathBuf::from("public");
        Self {
            stability_api_key: stability_api_key.into(),
            host: LOCAL_HOST.to_string(),
            port: 5000,
            production: false,
            output_dir: public_dir.join("generated-images"),
            public_dir,
            stability_base_url: DEFAULT_BASE_URL.to_string(),
            stability_engine_id: DEFAULT_ENGINE_ID.to_string(),
            request_timeout: Duration::from_secs(120),
            max_body_bytes: 20 * 1024 * 1024,
        }
    }

    pub fn from_args(args: ServerArgs) -> Self {
        let production = args.render.is_some();
        let host = args.host.unwrap_or_else(|| {
            if production {
                PRODUCTION_HOST.to_string()
            } else {
                LOCAL_HOST.to_string()
            }
        });
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| args.public_dir.join("generated-images"));

        Self {
            stability_api_key: args.stability_api_key,
            host,
            port: args.port,
            production,
            public_dir: args.public_dir,
            output_dir,
            stability_base_url: args.stability_base_url,
            stability_engine_id: args.stability_engine,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            max_body_bytes: args.max_body_mb * 1024 * 1024,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Directory holding the style preview images
    pub fn styles_dir(&self) -> PathBuf {
        self.public_dir.join("images").join("styles")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stability_api_key.trim().is_empty() {
            return Err("STABILITY_API_KEY must not be empty".to_string());
        }
        if self.request_timeout.is_zero() {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.max_body_bytes == 0 {
            return Err("Body limit must be greater than 0".to_string());
        }
        Ok(())
    }
}
