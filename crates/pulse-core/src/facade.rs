// SPDX-License-Identifier: Apache-2.0

//! Platform-agnostic analysis entry point.
//!
//! Callers build the tracker and completion client once (with whatever
//! credentials they resolved) and pass them in for every request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ai::insights::extract_key_points;
use crate::ai::{CompletionClient, Priority, Sentiment, request_analysis};
use crate::config::AnalysisConfig;
use crate::corpus::build_corpus;
use crate::github::{IssueState, IssueTracker};
use crate::shortcut::shortcut_analysis;
use crate::utils::{days_since, format_timestamp};

/// Per-request switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Also extract key points from the cleaned corpus (one extra completion).
    pub include_key_points: bool,
}

/// Analysis of one issue, as returned to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Issue number.
    pub issue_number: u64,
    /// Issue title.
    pub title: String,
    /// Login of the issue author.
    pub creator: String,
    /// Creation timestamp, RFC 3339 with `Z` suffix.
    pub creation_date: String,
    /// Open/closed state.
    pub state: IssueState,
    /// Number of comments.
    pub total_comments: usize,
    /// Number of distinct comment authors.
    pub unique_users: usize,
    /// Overall sentiment.
    pub sentiment: Sentiment,
    /// Triage priority.
    pub priority: Priority,
    /// Recommended actions.
    pub suggested_actions: Vec<String>,
    /// Improvement suggestion.
    pub improvement_suggestion: String,
    /// Key points, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

/// Analyzes an issue as of the current time.
///
/// See [`analyze_issue_at`].
pub async fn analyze_issue(
    tracker: &dyn IssueTracker,
    client: &dyn CompletionClient,
    settings: &AnalysisConfig,
    number: u64,
    options: AnalyzeOptions,
) -> crate::Result<IssueReport> {
    analyze_issue_at(tracker, client, settings, number, options, Utc::now()).await
}

/// Analyzes an issue, computing its age relative to `now`.
///
/// Fetches the issue and its comments, builds the cleaned corpus, then either
/// takes the closed-issue shortcut or makes one completion call and parses
/// the reply. Open issues always go to the model.
///
/// # Errors
///
/// Returns `PulseError::NotFound` if the issue does not exist, or propagates
/// tracker, completion and parsing failures unchanged.
#[instrument(skip(tracker, client, settings, now), fields(provider = client.name()))]
pub async fn analyze_issue_at(
    tracker: &dyn IssueTracker,
    client: &dyn CompletionClient,
    settings: &AnalysisConfig,
    number: u64,
    options: AnalyzeOptions,
    now: DateTime<Utc>,
) -> crate::Result<IssueReport> {
    let issue = tracker.fetch_issue(number).await?;
    let comments = tracker.fetch_comments(number).await?;

    let corpus = build_corpus(&issue, &comments, settings.max_comment_length);
    let age_in_days = days_since(&issue.created_at, &now);
    debug!(
        total_comments = corpus.total_comments,
        unique_users = corpus.unique_users,
        corpus_length = corpus.text.len(),
        age_in_days,
        "Built cleaned corpus"
    );

    let analysis = match shortcut_analysis(issue.state, &comments) {
        Some(analysis) => {
            info!("Closed issue already has a solution, skipping AI analysis");
            analysis
        }
        None => request_analysis(client, &corpus, age_in_days).await?,
    };

    let key_points = if options.include_key_points {
        Some(extract_key_points(client, &corpus.text).await?)
    } else {
        None
    };

    Ok(IssueReport {
        issue_number: issue.number,
        title: issue.title,
        creator: issue.creator,
        creation_date: format_timestamp(&issue.created_at),
        state: issue.state,
        total_comments: corpus.total_comments,
        unique_users: corpus.unique_users,
        sentiment: analysis.sentiment,
        priority: analysis.priority,
        suggested_actions: analysis.suggested_actions,
        improvement_suggestion: analysis.improvement_suggestion,
        key_points,
    })
}
