// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Pulse Core
//!
//! Core library for Pulse - sentiment and priority analysis of GitHub issues.
//!
//! This crate provides reusable components for:
//! - Fetching an issue and its comments from GitHub
//! - Stripping pasted logs and debug output from issue text
//! - Asking an `OpenAI`-compatible model for sentiment, priority and actions
//! - Validating the model's reply, or skipping the model for solved issues
//! - Configuration and credential loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulse_core::{
//!     AnalyzeOptions, Credentials, EnvTokenProvider, GitHubTracker, OpenAiClient,
//!     analyze_issue, load_config,
//! };
//!
//! # async fn example() -> pulse_core::Result<()> {
//! let config = load_config()?;
//! let credentials = Credentials::resolve(&EnvTokenProvider)?;
//!
//! let tracker = GitHubTracker::new(credentials.github_token.clone(), &config.github)?;
//! let client = OpenAiClient::new(credentials.ai_api_key.clone(), &config.ai)?;
//!
//! let report = analyze_issue(&tracker, &client, &config.analysis, 12345, AnalyzeOptions::default()).await?;
//! println!("{}: {} / {}", report.title, report.sentiment, report.priority);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ai`] - Prompts, completion client, reply parsing
//! - [`config`] - Configuration loading and paths
//! - [`corpus`] - Cleaned issue text for the model
//! - [`error`] - Error types
//! - [`github`] - GitHub issue tracker client
//! - [`sanitize`] - Log and debug output removal
//! - [`shortcut`] - Closed-issue shortcut

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{Credentials, EnvTokenProvider, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::PulseError;

/// Convenience Result type for Pulse operations.
///
/// This is equivalent to `std::result::Result<T, PulseError>`.
pub type Result<T> = std::result::Result<T, PulseError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AiConfig, AnalysisConfig, AppConfig, GitHubConfig, ServerConfig, config_dir,
    config_file_path, load_config, load_config_from,
};

// ============================================================================
// AI Analysis
// ============================================================================

pub use ai::{
    ANALYSIS_TEMPERATURE, Analysis, CompletionClient, CompletionRequest, OpenAiClient, Priority,
    Sentiment, parse_analysis, request_analysis,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{Comment, GitHubTracker, Issue, IssueState, IssueTracker};

// ============================================================================
// Text Processing
// ============================================================================

pub use corpus::{CleanedCorpus, build_corpus};
pub use sanitize::{clean_body, clean_comment, remove_debug_logs, remove_log_like_text, truncate};
pub use shortcut::shortcut_analysis;

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{days_since, format_timestamp};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{AnalyzeOptions, IssueReport, analyze_issue, analyze_issue_at};

// ============================================================================
// Modules
// ============================================================================

pub mod ai;
pub mod auth;
pub mod config;
pub mod corpus;
pub mod error;
pub mod facade;
pub mod github;
pub mod sanitize;
pub mod shortcut;
pub mod utils;
