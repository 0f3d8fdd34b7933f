// SPDX-License-Identifier: Apache-2.0

//! Closed-issue shortcut.
//!
//! A closed issue whose thread already names a fix gets a fixed, positive
//! analysis without calling the model.

use crate::ai::{Analysis, Priority, Sentiment};
use crate::github::{Comment, IssueState};

/// Lowercase markers that identify a comment as carrying the solution.
pub const SOLUTION_KEYWORDS: [&str; 5] = ["fixed", "resolved", "solution", "patch", "fix"];

const RESOLVED_IMPROVEMENTS: [&str; 3] = [
    "Consider adding a reference to this issue in the documentation",
    "Update related documentation to reflect the fix",
    "Consider adding tests to prevent similar issues in the future",
];

const RECURRING_ACTIONS: [&str; 3] = [
    "Additional users have reported similar issues",
    "Consider updating the documentation to make the solution more visible",
    "Review recent comments to ensure the solution is still valid",
];

const RECURRING_IMPROVEMENTS: [&str; 2] = [
    "Consider creating a troubleshooting guide for this common issue",
    "Add a note in the documentation about this known issue and its solution",
];

/// Returns true if the body mentions any solution keyword, ignoring case.
#[must_use]
pub fn mentions_solution(body: &str) -> bool {
    let lower = body.to_lowercase();
    SOLUTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Returns the earliest comment that mentions a solution keyword.
#[must_use]
pub fn find_solution(comments: &[Comment]) -> Option<&Comment> {
    comments
        .iter()
        .filter(|c| mentions_solution(&c.body))
        .min_by_key(|c| c.created_at)
}

/// Builds the canned analysis for a closed issue with a known solution.
///
/// Returns `None` for open issues or when no comment names a fix. The
/// solution comment is quoted verbatim. Comments posted strictly after the
/// solution extend both lists.
#[must_use]
pub fn shortcut_analysis(state: IssueState, comments: &[Comment]) -> Option<Analysis> {
    if state != IssueState::Closed {
        return None;
    }

    let solution = find_solution(comments)?;
    let has_recent = comments
        .iter()
        .any(|c| c.created_at > solution.created_at);

    let mut suggested_actions = vec![
        "Issue is already resolved".to_string(),
        format!("Solution was provided by {}", solution.author),
        format!("Fix is available in {}", solution.body),
    ];
    let mut improvements: Vec<&str> = RESOLVED_IMPROVEMENTS.to_vec();

    if has_recent {
        suggested_actions.extend(RECURRING_ACTIONS.iter().map(ToString::to_string));
        improvements.extend(RECURRING_IMPROVEMENTS);
    }

    Some(Analysis {
        sentiment: Sentiment::Happy,
        priority: Priority::Low,
        suggested_actions,
        improvement_suggestion: improvements.join("\n"),
    })
}
