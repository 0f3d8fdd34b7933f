// SPDX-License-Identifier: Apache-2.0

//! AI request/response types.
//!
//! Defines the chat completion wire structures and the analysis result that the
//! rest of the pipeline works with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PulseError;

/// A chat message for the chat completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat completions API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4").
    pub model: String,
    /// List of messages in the conversation.
    pub messages: Vec<ChatMessage>,
    /// Temperature for response randomness.
    pub temperature: f32,
    /// Maximum tokens in response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response from the chat completions API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// List of choices (usually just one).
    pub choices: Vec<Choice>,
}

/// A single choice in the chat completion response.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// Message inside a choice. Content can be null on some providers.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Sentiment of the people involved in an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Very frustrated.
    VeryFrustrated,
    /// Frustrated.
    Frustrated,
    /// Mildly frustrated.
    MildlyFrustrated,
    /// Neutral.
    Neutral,
    /// Happy.
    Happy,
    /// Very happy.
    VeryHappy,
}

impl Sentiment {
    /// All values, from most negative to most positive.
    pub const ALL: [Sentiment; 6] = [
        Sentiment::VeryFrustrated,
        Sentiment::Frustrated,
        Sentiment::MildlyFrustrated,
        Sentiment::Neutral,
        Sentiment::Happy,
        Sentiment::VeryHappy,
    ];

    /// Returns the snake_case name used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::VeryFrustrated => "very_frustrated",
            Sentiment::Frustrated => "frustrated",
            Sentiment::MildlyFrustrated => "mildly_frustrated",
            Sentiment::Neutral => "neutral",
            Sentiment::Happy => "happy",
            Sentiment::VeryHappy => "very_happy",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PulseError::InvalidFieldValue {
                field: "sentiment".to_string(),
                value: s.to_string(),
                raw: None,
            })
    }
}

/// Triage priority of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention now.
    High,
    /// Normal queue.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// All values, from most to least urgent.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns the name used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PulseError::InvalidFieldValue {
                field: "priority".to_string(),
                value: s.to_string(),
                raw: None,
            })
    }
}

/// Structured analysis of an issue.
///
/// Produced either by the closed-issue shortcut or by parsing an AI reply; both
/// paths fill every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Overall sentiment.
    pub sentiment: Sentiment,
    /// Triage priority.
    pub priority: Priority,
    /// Ordered list of recommended actions.
    pub suggested_actions: Vec<String>,
    /// Suggestion for improving the issue or the project around it.
    pub improvement_suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_round_trips_through_str() {
        for sentiment in Sentiment::ALL {
            assert_eq!(sentiment.as_str().parse::<Sentiment>().unwrap(), sentiment);
        }
    }

    #[test]
    fn sentiment_rejects_unknown_value() {
        let err = "ecstatic".parse::<Sentiment>().unwrap_err();
        assert!(matches!(
            err,
            PulseError::InvalidFieldValue { ref field, ref value, .. }
                if field == "sentiment" && value == "ecstatic"
        ));
    }

    #[test]
    fn priority_is_case_sensitive() {
        assert!("High".parse::<Priority>().is_err());
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn analysis_serializes_snake_case_enums() {
        let analysis = Analysis {
            sentiment: Sentiment::MildlyFrustrated,
            priority: Priority::Medium,
            suggested_actions: vec!["Reproduce on v5.1".to_string()],
            improvement_suggestion: "Attach a minimal example".to_string(),
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["sentiment"], "mildly_frustrated");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["suggested_actions"][0], "Reproduce on v5.1");
    }

    #[test]
    fn chat_request_omits_absent_max_tokens() {
        let request = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::system("s"), ChatMessage::user("u")],
            temperature: 0.3,
            max_tokens: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
