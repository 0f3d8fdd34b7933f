// SPDX-License-Identifier: Apache-2.0

//! AI integration module.
//!
//! Builds prompts from a cleaned issue corpus, sends them through a
//! [`CompletionClient`], and turns the reply into a validated [`Analysis`].

pub mod client;
pub mod insights;
pub mod openai;
pub mod parse;
pub mod prompt;
pub mod types;

pub use client::{CompletionClient, CompletionRequest};
pub use openai::OpenAiClient;
pub use parse::parse_analysis;
pub use types::{Analysis, Priority, Sentiment};

use tracing::{instrument, warn};

use crate::corpus::CleanedCorpus;

/// Sampling temperature for every analysis-related completion.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Asks the model for a full analysis of `corpus` and validates the reply.
///
/// Makes exactly one completion call.
///
/// # Errors
///
/// Propagates the client's error, or the parser's error if the reply cannot
/// be turned into an [`Analysis`]. On parse failure the raw reply is logged.
#[instrument(skip(client, corpus), fields(provider = client.name()))]
pub async fn request_analysis(
    client: &dyn CompletionClient,
    corpus: &CleanedCorpus,
    age_in_days: i64,
) -> crate::Result<Analysis> {
    let request = CompletionRequest::new(
        prompt::ANALYSIS_SYSTEM_PROMPT,
        prompt::build_analysis_prompt(
            &corpus.text,
            corpus.total_comments,
            corpus.unique_users,
            age_in_days,
        ),
    );

    let reply = client.complete(&request).await?;

    parse_analysis(&reply).inspect_err(|e| {
        warn!(error = %e, raw_response = %reply, "Failed to parse AI analysis");
    })
}
