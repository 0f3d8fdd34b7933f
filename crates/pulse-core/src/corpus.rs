// SPDX-License-Identifier: Apache-2.0

//! Corpus assembly.
//!
//! Flattens an issue and its comments into the single text blob the model reads,
//! along with the comment statistics the prompt mentions. No overall size cap is
//! applied here; very long threads are left to the model's context window.

use std::collections::HashSet;
use std::fmt::Write;

use crate::github::{Comment, Issue};
use crate::sanitize::{clean_body, clean_comment};
use crate::utils::format_timestamp;

/// Default per-comment character budget.
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 200;

/// Cleaned text plus comment statistics for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedCorpus {
    /// Header, cleaned body and attributed comments.
    pub text: String,
    /// Number of comments.
    pub total_comments: usize,
    /// Number of distinct comment authors (case-sensitive).
    pub unique_users: usize,
}

/// Counts distinct comment authors, comparing logins exactly.
#[must_use]
pub fn unique_commenters(comments: &[Comment]) -> usize {
    comments
        .iter()
        .map(|c| c.author.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Builds the cleaned corpus for an issue.
///
/// Comments are emitted in the order given, each cleaned and cut to
/// `max_comment_length` characters. The issue body is cleaned but never cut.
#[must_use]
pub fn build_corpus(issue: &Issue, comments: &[Comment], max_comment_length: usize) -> CleanedCorpus {
    let mut text = String::new();

    let _ = write!(text, "Issue Title: {}\n\n", issue.title);
    let _ = write!(text, "Issue Created: {}\n\n", format_timestamp(&issue.created_at));
    let _ = write!(text, "Issue Body (Cleaned): {}\n\n", clean_body(&issue.body));

    for comment in comments {
        let _ = write!(
            text,
            "Comment by {} at {}:\n{}\n\n",
            comment.author,
            format_timestamp(&comment.created_at),
            clean_comment(&comment.body, max_comment_length)
        );
    }

    CleanedCorpus {
        text,
        total_comments: comments.len(),
        unique_users: unique_commenters(comments),
    }
}
