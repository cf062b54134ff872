//! OpenAI-compatible HTTP backend.
//!
//! Speaks the `/chat/completions` wire format, which also covers
//! OpenAI-compatible gateways when `base_url` is overridden.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::BackendError;
use super::trait_def::CompletionBackend;

/// Default chat completions endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration for [`OpenAiBackend`]. All knobs live in the config file
/// rather than in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Model identifier to request.
    pub model: String,
    /// Endpoint URL; override for OpenAI-compatible gateways.
    pub base_url: String,
    /// Whole-request timeout. The call fails rather than hanging.
    pub timeout_secs: u64,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            temperature: 0.2,
        }
    }
}

/// Production [`CompletionBackend`] over an OpenAI-compatible HTTP API.
///
/// Stateless apart from the connection pool inside `reqwest::Client`, so a
/// single instance is shared across concurrent requests.
pub struct OpenAiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiBackend {
    /// Build a backend from config, reading the API key from the
    /// configured environment variable.
    pub fn new(config: &OpenAiConfig) -> Result<Self, BackendError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            BackendError::Misconfiguration(format!(
                "API key not found in environment variable {:?}",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Misconfiguration(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!(model = %self.model, url = %self.base_url, "requesting completion");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(BackendError::EmptyResponse);
        }

        debug!(chars = content.len(), "completion received");
        Ok(content)
    }
}
