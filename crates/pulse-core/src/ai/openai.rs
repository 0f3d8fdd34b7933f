// SPDX-License-Identifier: Apache-2.0

//! `OpenAI`-compatible chat completions client.
//!
//! Works with any endpoint that speaks the `/v1/chat/completions` dialect.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::client::{CompletionClient, CompletionRequest};
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::auth::OPENAI_API_KEY_ENV;
use crate::config::AiConfig;
use crate::error::PulseError;

/// Chat completions client.
///
/// Holds HTTP client, API key, and model configuration for reuse across
/// requests.
pub struct OpenAiClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// API key sent as a bearer token.
    api_key: SecretString,
    /// Provider name for logs and errors.
    provider: String,
    /// Endpoint URL.
    api_url: String,
    /// Model name (e.g., "gpt-4").
    model: String,
}

impl OpenAiClient {
    /// Creates a client with the provided API key.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::Network` if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, config: &AiConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key,
            provider: config.provider.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn ai_error(&self, message: String, status: Option<u16>) -> PulseError {
        PulseError::AI {
            message,
            status,
            provider: self.provider.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        &self.provider
    }

    #[instrument(skip(self, request), fields(provider = %self.provider, model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> crate::Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(request.system.clone()),
                ChatMessage::user(request.prompt.clone()),
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(prompt_length = request.prompt.len(), "Calling {} API", self.provider);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 {
                return Err(self.ai_error(
                    format!(
                        "Invalid {} API key. Check your {OPENAI_API_KEY_ENV} environment variable.",
                        self.provider
                    ),
                    Some(401),
                ));
            }
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "AI provider returned an error");
            return Err(self.ai_error(
                format!("{} API error (HTTP {}): {error_body}", self.provider, status.as_u16()),
                Some(status.as_u16()),
            ));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| self.ai_error("No response from AI model".to_string(), None))?;

        debug!(response_length = content.len(), "Received AI response");

        Ok(content)
    }
}
