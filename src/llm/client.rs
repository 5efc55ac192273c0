//! HTTP client for an Ollama-style generation API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::GenerationBackend;
use super::error::GenerationError;

/// Default generation endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
/// Timeout applied to availability probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`OllamaClient`].
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL of the generation API.
    pub base_url: String,
    /// Model name passed to the API.
    pub model: String,
    /// Timeout for generation requests.
    pub timeout: Duration,
    /// Total attempts for [`GenerationBackend::generate_with_retry`].
    pub max_retries: u32,
    /// Sampling temperature forwarded to the API.
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "llama2".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            temperature: 0.7,
        }
    }
}

/// Generation client speaking the Ollama HTTP API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl OllamaClient {
    /// Builds a client with a request timeout from the config.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// The client configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[async_trait]
impl GenerationBackend for OllamaClient {
    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.base_url);

        match self.http.get(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!(%error, "generation backend probe failed");
                false
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.config.base_url);
        let payload = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
            },
        });

        let response = self.http.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.response.trim().to_string();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}
