// SPDX-License-Identifier: Apache-2.0

//! Completion client abstraction.
//!
//! The pipeline only needs "send these two messages, give me the text back".

use async_trait::async_trait;

/// One completion exchange: a system instruction and a user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction fixing the reply format.
    pub system: String,
    /// User prompt carrying the issue content.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Optional cap on reply length.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a request at [`super::ANALYSIS_TEMPERATURE`] with no token cap.
    #[must_use]
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature: super::ANALYSIS_TEMPERATURE,
            max_tokens: None,
        }
    }

    /// Caps the reply length.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A single-shot LLM completion capability.
///
/// Implementations make exactly one upstream call per invocation and never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Sends the request and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::AI` or `PulseError::Network` if the provider is
    /// unreachable, answers with a non-2xx status, or returns no content.
    async fn complete(&self, request: &CompletionRequest) -> crate::Result<String>;
}
