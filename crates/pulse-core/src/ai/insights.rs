// SPDX-License-Identifier: Apache-2.0

//! Single-purpose completions run alongside the main analysis.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::client::{CompletionClient, CompletionRequest};
use super::prompt::{
    KEY_POINTS_SYSTEM_PROMPT, PRIORITY_SYSTEM_PROMPT, SENTIMENT_SYSTEM_PROMPT,
    build_key_points_prompt, build_priority_prompt, build_sentiment_prompt,
};
use super::types::{Priority, Sentiment};
use crate::error::PulseError;

/// Upper bound on returned key points.
pub const MAX_KEY_POINTS: usize = 5;

/// Token cap for single-label classification replies.
pub const CLASSIFICATION_MAX_TOKENS: u32 = 10;

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid number prefix regex"));

/// Renumbers reply lines as `1. `, `2. `, ... and keeps the first five.
fn renumber(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_KEY_POINTS)
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, NUMBER_PREFIX.replace(line, "")))
        .collect()
}

/// Asks the model for the key points of an issue.
///
/// # Errors
///
/// Propagates any error from the completion client.
#[instrument(skip(client, text), fields(provider = client.name()))]
pub async fn extract_key_points(
    client: &dyn CompletionClient,
    text: &str,
) -> crate::Result<Vec<String>> {
    let request = CompletionRequest::new(KEY_POINTS_SYSTEM_PROMPT, build_key_points_prompt(text));
    let reply = client.complete(&request).await?;
    let points = renumber(&reply);
    debug!(count = points.len(), "Extracted key points");
    Ok(points)
}

/// Classifies the overall sentiment of `text` with a single label.
///
/// # Errors
///
/// Returns `PulseError::InvalidFieldValue` if the reply is not an allowed
/// sentiment, or propagates the completion client's error.
#[instrument(skip(client, text), fields(provider = client.name()))]
pub async fn classify_sentiment(
    client: &dyn CompletionClient,
    text: &str,
) -> crate::Result<Sentiment> {
    let request = CompletionRequest::new(SENTIMENT_SYSTEM_PROMPT, build_sentiment_prompt(text))
        .with_max_tokens(CLASSIFICATION_MAX_TOKENS);
    let reply = client.complete(&request).await?;
    reply
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|e: PulseError| e.with_raw_response(&reply))
}

/// Classifies the triage priority of `text` with a single label.
///
/// # Errors
///
/// Returns `PulseError::InvalidFieldValue` if the reply is not an allowed
/// priority, or propagates the completion client's error.
#[instrument(skip(client, text), fields(provider = client.name()))]
pub async fn classify_priority(
    client: &dyn CompletionClient,
    text: &str,
) -> crate::Result<Priority> {
    let request = CompletionRequest::new(PRIORITY_SYSTEM_PROMPT, build_priority_prompt(text))
        .with_max_tokens(CLASSIFICATION_MAX_TOKENS);
    let reply = client.complete(&request).await?;
    reply
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|e: PulseError| e.with_raw_response(&reply))
}
