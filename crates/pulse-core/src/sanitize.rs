// SPDX-License-Identifier: Apache-2.0

//! Noise removal for issue and comment bodies.
//!
//! Bug reports tend to carry pasted serial-console output and fenced debug logs
//! that eat the model's context without helping the classification. The helpers
//! here strip that noise before the corpus is assembled. Fenced blocks are removed
//! wholesale, including any prose that happens to sit inside them.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a triple-backtick fenced block, across lines, non-greedy.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid fenced block regex"));

/// Matches an ESP-IDF style log line such as `E (1234) wifi: connection failed`.
static LOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[A-Z]\s*\(\d+\)\s\w+:.*$").expect("valid log line regex")
});

/// Suffix appended to truncated comments.
pub const ELLIPSIS: &str = "...";

/// Removes every triple-backtick fenced block (fences included) and trims.
///
/// # Examples
///
/// ```
/// use pulse_core::sanitize::remove_debug_logs;
///
/// let text = "Crash on boot\n```\nE (12) boot: panic\n```\nAny ideas?";
/// assert_eq!(remove_debug_logs(text), "Crash on boot\n\nAny ideas?");
/// ```
#[must_use]
pub fn remove_debug_logs(text: &str) -> String {
    FENCED_BLOCK.replace_all(text, "").trim().to_string()
}

/// Removes log-like lines (`E (1234) tag: message`) and trims.
///
/// The line must start with a single uppercase letter; the line break itself is
/// kept, so surrounding paragraphs stay separated.
///
/// # Examples
///
/// ```
/// use pulse_core::sanitize::remove_log_like_text;
///
/// assert_eq!(remove_log_like_text("W (88) spi: timeout\nStill broken"), "Still broken");
/// assert_eq!(remove_log_like_text("hello (1) tag: x"), "hello (1) tag: x");
/// ```
#[must_use]
pub fn remove_log_like_text(text: &str) -> String {
    LOG_LINE.replace_all(text, "").trim().to_string()
}

/// Cuts text to `max_len` characters and appends `...` when it is longer.
///
/// Counts characters, not bytes, so multi-byte UTF-8 is never split. Unlike a
/// fixed-width truncation the suffix is added on top of `max_len`.
///
/// # Examples
///
/// ```
/// use pulse_core::sanitize::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("abcdef", 3), "abc...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Cleans an issue body: fenced blocks first, then log lines. Never truncated.
#[must_use]
pub fn clean_body(text: &str) -> String {
    remove_log_like_text(&remove_debug_logs(text))
}

/// Cleans a comment body and truncates it to `max_len` characters.
#[must_use]
pub fn clean_comment(text: &str, max_len: usize) -> String {
    truncate(&clean_body(text), max_len)
}
