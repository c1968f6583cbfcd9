//! Gemini REST client.

use crate::gemini::{GeminiConfig, GeminiRequest, GeminiResponse, extract_text};
use aetheria_core::{RawResponse, StoryRequest};
use aetheria_error::{
    ConfigError, ConfigErrorKind, FormatError, GenerationResult, TransportError,
    TransportErrorKind,
};
use aetheria_interface::StoryDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Client for Gemini's `generateContent` endpoint with JSON structured output.
///
/// Each [`StoryDriver::generate`] call is a single POST. There is no retry,
/// caching or rate limiting; failures go straight back to the caller.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::HttpClient(e.to_string())))?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client from `aetheria.toml`, `AETHERIA_*` and `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GeminiConfig::load()?)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }
}

#[async_trait]
impl StoryDriver for GeminiClient {
    #[instrument(skip(self, request), fields(provider = "gemini", model = %self.config.model()))]
    async fn generate(&self, request: &StoryRequest) -> GenerationResult<RawResponse> {
        let body = GeminiRequest::from_story_request(
            request,
            *self.config.temperature(),
            *self.config.max_output_tokens(),
        );
        let start = Instant::now();

        debug!(
            prompt_chars = request.prompt().as_str().len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                TransportError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "Failed to read error response body");
                    status.canonical_reason().unwrap_or_default().to_string()
                }
            };
            error!(status = %status, error = %message, "API error");
            return Err(TransportError::new(TransportErrorKind::Status {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            TransportError::from(e)
        })?;

        let envelope: GeminiResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Failed to parse response envelope");
            FormatError::new(format!("Failed to parse Gemini envelope: {}", e))
        })?;

        if let Some(usage) = &envelope.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                completion_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Token usage"
            );
        }

        let raw = extract_text(&envelope).inspect_err(|e| {
            error!(error = %e, "Response carried no usable text");
        })?;

        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            payload_chars = raw.text().len(),
            "Received Gemini response"
        );

        Ok(raw)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
