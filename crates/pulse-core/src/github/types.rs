// SPDX-License-Identifier: Apache-2.0

//! Issue tracker records.
//!
//! Read-only snapshots of what GitHub returned; nothing here is mutated after
//! the fetch.

use std::fmt;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

impl IssueState {
    /// Returns the lowercase name used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Issue {
    /// Issue number.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body (markdown, may contain fenced logs). Empty when absent.
    #[builder(default)]
    pub body: String,
    /// Login of the issue author.
    pub creator: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Current state.
    pub state: IssueState,
}

/// A comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author login.
    pub author: String,
    /// Comment body. Empty when absent.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment.
    #[must_use]
    pub fn new(author: impl Into<String>, body: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            created_at,
        }
    }
}
