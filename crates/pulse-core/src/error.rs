// SPDX-License-Identifier: Apache-2.0

//! Error types for Pulse.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Binaries should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while analyzing an issue.
#[derive(Error, Debug)]
pub enum PulseError {
    /// The requested issue does not exist in the target repository.
    #[error("Issue #{number} not found")]
    NotFound {
        /// Issue number that was requested.
        number: u64,
    },

    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// AI provider error (non-2xx status, empty reply, invalid key).
    #[error("AI provider error: {message}")]
    AI {
        /// Error message from the AI provider.
        message: String,
        /// Optional HTTP status code from the provider.
        status: Option<u16>,
        /// Name of the AI provider (e.g., `openai`).
        provider: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// AI reply did not contain parseable JSON.
    #[error("Malformed JSON in AI response: {source}")]
    MalformedResponse {
        /// The raw reply, kept for operator inspection.
        raw: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// AI reply parsed but a required field was absent or null.
    #[error("Missing required field: {field}")]
    IncompleteResponse {
        /// Name of the first missing field.
        field: String,
        /// The raw reply, kept for operator inspection.
        raw: String,
    },

    /// AI reply contained a value outside the allowed set or of the wrong shape.
    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue {
        /// Name of the offending field.
        field: String,
        /// The rejected value, rendered as text.
        value: String,
        /// The full reply the value came from, when it came from a model.
        raw: Option<String>,
    },

    /// A required secret is not available at startup.
    #[error("Missing credential - set the {env_var} environment variable")]
    MissingCredential {
        /// Environment variable that should hold the secret.
        env_var: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl PulseError {
    /// Returns the raw AI reply for parse and validation failures.
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            PulseError::MalformedResponse { raw, .. }
            | PulseError::IncompleteResponse { raw, .. } => Some(raw),
            PulseError::InvalidFieldValue { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }

    /// Attaches the model reply to a validation failure that lacks one.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_raw_response(self, reply: &str) -> Self {
        match self {
            PulseError::InvalidFieldValue {
                field,
                value,
                raw: None,
            } => PulseError::InvalidFieldValue {
                field,
                value,
                raw: Some(reply.to_string()),
            },
            other => other,
        }
    }
}

impl From<octocrab::Error> for PulseError {
    fn from(err: octocrab::Error) -> Self {
        PulseError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for PulseError {
    fn from(err: config::ConfigError) -> Self {
        PulseError::Config {
            message: err.to_string(),
        }
    }
}
