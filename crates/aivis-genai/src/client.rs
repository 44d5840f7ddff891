//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps `reqwest` with credential handling, structured-output requests and
//! typed response decoding. The client is built from explicit settings and
//! injected into callers; there is no process-wide instance.

use std::time::Duration;

use aivis_core::AppConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::GenAiError;
use crate::generator::TextGenerator;
use crate::types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    RequestPart, Schema,
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// Construction settings for [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// `None` disables the request timeout entirely.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl GeminiSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.genai_model.clone(),
            base_url: config.genai_base_url.clone(),
            timeout_secs: config.genai_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for the generative-text completion service.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a new client from explicit settings.
    ///
    /// An empty API key is accepted here; every call then fails with
    /// [`GenAiError::MissingApiKey`] without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GenAiError::InvalidBaseUrl`] if the base
    /// URL does not parse.
    pub fn new(settings: GeminiSettings) -> Result<Self, GenAiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.as_str());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = build_endpoint(&settings.base_url, &settings.model)?;

        Ok(Self {
            client,
            api_key: settings.api_key,
            model: settings.model,
            endpoint,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`GeminiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GenAiError> {
        Self::new(GeminiSettings::from_app_config(config))
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one `generateContent` request asking for JSON output.
    ///
    /// When `schema` is given it is attached as the response schema. Returns
    /// the raw text of the first candidate; the caller decodes it.
    ///
    /// # Errors
    ///
    /// - [`GenAiError::MissingApiKey`] if no credential is configured.
    /// - [`GenAiError::Http`] on network failure.
    /// - [`GenAiError::Status`] on a non-2xx response.
    /// - [`GenAiError::Deserialize`] if the envelope does not match the
    ///   expected shape.
    /// - [`GenAiError::EmptyResponse`] if no candidate text was produced.
    pub async fn generate_content(
        &self,
        prompt: &str,
        schema: Option<&Schema>,
    ) -> Result<String, GenAiError> {
        if self.api_key.trim().is_empty() {
            return Err(GenAiError::MissingApiKey);
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
            },
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenAiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GenAiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        envelope
            .first_text()
            .ok_or_else(|| GenAiError::EmptyResponse {
                finish_reason: envelope.finish_reason(),
            })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, schema: Option<&Schema>) -> Result<String, GenAiError> {
        self.generate_content(prompt, schema).await
    }
}

/// Builds `{base}/v1beta/models/{model}:generateContent`.
///
/// The base URL is normalised to end with exactly one slash so `join` appends
/// rather than replacing the last path segment.
fn build_endpoint(base_url: &str, model: &str) -> Result<Url, GenAiError> {
    let invalid = |reason: String| GenAiError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    base.join(&format!("v1beta/models/{}:generateContent", model.trim()))
        .map_err(|e| invalid(e.to_string()))
}

/// Extracts the service's error message, falling back to a truncated body.
fn error_message(body: &str) -> String {
    const MAX_BODY_CHARS: usize = 200;

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
