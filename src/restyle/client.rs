// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stability AI v1 REST client for image-to-image and masked generation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    multipart::{Form, Part},
    Client,
};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::prompt::PromptPair;

pub const DEFAULT_BASE_URL: &str = "https://api.stability.ai";
pub const DEFAULT_ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";

/// Upper bound (inclusive) for randomly drawn seeds
pub const MAX_SEED: u32 = 1_000_000;

const STYLE_PRESET: &str = "photographic";
const MASK_SOURCE: &str = "MASK_IMAGE_WHITE";

#[derive(Debug, Error)]
pub enum StabilityError {
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stability API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("malformed Stability API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("API response contains no image data")]
    MissingArtifact,

    #[error("invalid base64 image in API response: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Sampling parameters for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub prompt: String,
    pub negative_prompt: String,
    /// Weight of the negative prompt; must be negative
    pub negative_weight: f32,
    /// How much the init image constrains the result; not sent for masked edits
    pub image_strength: Option<f32>,
    pub cfg_scale: u32,
    pub steps: u32,
    pub samples: u32,
    pub style_preset: String,
    /// Random seed in `1..=MAX_SEED` when not set
    pub seed: Option<u32>,
}

impl GenerationParams {
    fn with_defaults(prompts: PromptPair) -> Self {
        Self {
            prompt: prompts.prompt,
            negative_prompt: prompts.negative_prompt,
            negative_weight: -1.0,
            image_strength: None,
            cfg_scale: 10,
            steps: 50,
            samples: 1,
            style_preset: STYLE_PRESET.to_string(),
            seed: None,
        }
    }

    /// Whole-room restyle: keeps more of the original photo
    pub fn style_transfer(prompts: PromptPair) -> Self {
        Self {
            negative_weight: -1.2,
            image_strength: Some(0.4),
            cfg_scale: 9,
            ..Self::with_defaults(prompts)
        }
    }

    pub fn region_edit(prompts: PromptPair) -> Self {
        Self::with_defaults(prompts)
    }

    pub fn customization(prompts: PromptPair) -> Self {
        Self {
            image_strength: Some(0.5),
            ..Self::with_defaults(prompts)
        }
    }

    /// Text fields of the multipart form, seed resolved
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let seed = self
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(1..=MAX_SEED));

        let mut fields = vec![
            ("text_prompts[0][text]", self.prompt.clone()),
            ("text_prompts[0][weight]", "1.0".to_string()),
            ("text_prompts[1][text]", self.negative_prompt.clone()),
            ("text_prompts[1][weight]", self.negative_weight.to_string()),
            ("cfg_scale", self.cfg_scale.to_string()),
            ("samples", self.samples.to_string()),
            ("steps", self.steps.to_string()),
            ("style_preset", self.style_preset.clone()),
            ("seed", seed.to_string()),
        ];
        if let Some(strength) = self.image_strength {
            fields.push(("image_strength", strength.to_string()));
        }
        fields
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtifactsResponse {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
pub struct Artifact {
    pub base64: Option<String>,
    pub seed: Option<u64>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Decoded first artifact of a generation response
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub image: Vec<u8>,
    pub seed: Option<u64>,
    pub finish_reason: Option<String>,
    pub processing_time_ms: u64,
}

/// Client for the Stability AI generation endpoints
pub struct StabilityClient {
    client: Client,
    base_url: String,
    engine_id: String,
}

impl StabilityClient {
    pub fn new(
        api_key: &str,
        base_url: &str,
        engine_id: &str,
        timeout: Duration,
    ) -> Result<Self, StabilityError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| StabilityError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        info!(
            "Stability client configured: base_url={}, engine={}",
            base_url, engine_id
        );

        Ok(Self {
            client,
            base_url,
            engine_id: engine_id.to_string(),
        })
    }

    pub fn image_to_image_url(&self) -> String {
        format!(
            "{}/v1/generation/{}/image-to-image",
            self.base_url, self.engine_id
        )
    }

    pub fn masking_url(&self) -> String {
        format!("{}/masking", self.image_to_image_url())
    }

    /// Generate from an init image (PNG bytes)
    pub async fn image_to_image(
        &self,
        init_png: Vec<u8>,
        params: &GenerationParams,
    ) -> Result<GeneratedArtifact, StabilityError> {
        let form = Self::text_form(params).part("init_image", png_part(init_png)?);
        self.send(self.image_to_image_url(), form).await
    }

    /// Generate only inside the white area of `mask_png`
    pub async fn image_to_image_masked(
        &self,
        init_png: Vec<u8>,
        mask_png: Vec<u8>,
        params: &GenerationParams,
    ) -> Result<GeneratedArtifact, StabilityError> {
        let form = Self::text_form(params)
            .text("mask_source", MASK_SOURCE)
            .part("init_image", png_part(init_png)?)
            .part("mask_image", png_part(mask_png)?);
        self.send(self.masking_url(), form).await
    }

    fn text_form(params: &GenerationParams) -> Form {
        params
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }

    async fn send(&self, url: String, form: Form) -> Result<GeneratedArtifact, StabilityError> {
        let start = std::time::Instant::now();
        debug!("Stability generate POST {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(StabilityError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ArtifactsResponse = serde_json::from_str(&text)?;
        let first = parsed
            .artifacts
            .into_iter()
            .next()
            .ok_or(StabilityError::MissingArtifact)?;
        let encoded = first.base64.ok_or(StabilityError::MissingArtifact)?;
        let image = STANDARD.decode(encoded.trim())?;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "Stability returned {} bytes in {}ms (finish_reason={:?})",
            image.len(),
            processing_time_ms,
            first.finish_reason
        );

        Ok(GeneratedArtifact {
            image,
            seed: first.seed,
            finish_reason: first.finish_reason,
            processing_time_ms,
        })
    }
}

fn png_part(bytes: Vec<u8>) -> Result<Part, StabilityError> {
    Ok(Part::bytes(bytes)
        .file_name("image.png")
        .mime_str("image/png")?)
}
