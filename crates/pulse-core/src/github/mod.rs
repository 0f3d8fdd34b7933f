// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Defines the `IssueTracker` capability the analysis pipeline depends on and
//! its octocrab-backed implementation.

use async_trait::async_trait;

pub mod issues;
pub mod types;

pub use issues::GitHubTracker;
pub use types::{Comment, Issue, IssueState};

/// Read-only access to issues in a single target repository.
///
/// Each call is one request (or one sequential run of page requests); nothing is
/// retried or cached.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches an issue by number.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::NotFound` when the tracker reports 404, or
    /// `PulseError::GitHub` for any other failure.
    async fn fetch_issue(&self, number: u64) -> crate::Result<Issue>;

    /// Fetches every comment on an issue, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::GitHub` if any page request fails.
    async fn fetch_comments(&self, number: u64) -> crate::Result<Vec<Comment>>;
}
