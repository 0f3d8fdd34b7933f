// SPDX-License-Identifier: Apache-2.0

//! Prompt templates for issue analysis.
//!
//! Issue text is interpolated verbatim. Nothing is escaped, so an issue that
//! contains instructions aimed at the model reaches it unchanged.

/// System instruction fixing the reply shape for [`build_analysis_prompt`].
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are an AI assistant analyzing GitHub issues. \
Provide your analysis in JSON format with the following fields: \
sentiment (one of: very_frustrated, frustrated, mildly_frustrated, neutral, happy, very_happy), \
priority (high, medium, low), \
suggested_actions (as an array of strings), \
and improvement_suggestion.";

/// Builds the user prompt for a full issue analysis.
///
/// # Examples
///
/// ```
/// use pulse_core::ai::prompt::build_analysis_prompt;
///
/// let prompt = build_analysis_prompt("Issue Title: crash", 4, 2, 30);
/// assert!(prompt.contains("- Total Comments: 4"));
/// assert!(prompt.contains("- Days Since Creation: 30"));
/// ```
#[must_use]
pub fn build_analysis_prompt(
    cleaned_text: &str,
    total_comments: usize,
    unique_users: usize,
    age_in_days: i64,
) -> String {
    format!(
        "
You are an AI assistant analyzing GitHub issues. Your task is to classify the sentiment of the issue and comments, prioritize the issue, and suggest actions.
Issue Details:
- Cleaned Text: {cleaned_text}
- Total Comments: {total_comments}
- Unique Users: {unique_users}
- Days Since Creation: {age_in_days}
Provide:
1. Sentiment classification (one of: very_frustrated, frustrated, mildly_frustrated, neutral, happy, very_happy).
2. Priority (high, medium, low).
3. Suggested actions (as an array of strings, each action on a new line).
4. A one-sentence improvement suggestion.
"
    )
}

/// System instruction for key point extraction.
pub const KEY_POINTS_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts key points \
from GitHub issues. Format each point as a numbered list item (1., 2., etc.).";

/// Builds the user prompt asking for 3-5 numbered key points.
#[must_use]
pub fn build_key_points_prompt(text: &str) -> String {
    format!(
        "
Extract 3-5 key points from this GitHub issue text. Focus on the main problems, solutions, or important information.
Format each point as a numbered list (1., 2., etc.) with clear, concise sentences.

Issue Text:
{text}

Return only the key points, one per line, each starting with a number followed by a period and space.
"
    )
}

/// System instruction for single-label sentiment classification.
pub const SENTIMENT_SYSTEM_PROMPT: &str =
    "You are a sentiment analysis assistant. Return only the sentiment classification.";

/// Builds the user prompt for single-label sentiment classification.
#[must_use]
pub fn build_sentiment_prompt(text: &str) -> String {
    format!(
        "
Analyze the sentiment of this GitHub issue text and classify it as one of: very_frustrated, frustrated, mildly_frustrated, neutral, happy, very_happy.

Text: {text}

Return only the sentiment classification, nothing else.
"
    )
}

/// System instruction for single-label priority classification.
pub const PRIORITY_SYSTEM_PROMPT: &str =
    "You are a priority analysis assistant. Return only the priority classification.";

/// Builds the user prompt for single-label priority classification.
#[must_use]
pub fn build_priority_prompt(text: &str) -> String {
    format!(
        "
Analyze the priority of this GitHub issue text and classify it as one of: high, medium, low.

Text: {text}

Return only the priority classification, nothing else.
"
    )
}
