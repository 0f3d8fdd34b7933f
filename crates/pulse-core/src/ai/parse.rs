// SPDX-License-Identifier: Apache-2.0

//! Recovery and validation of the structured analysis from a model reply.
//!
//! Models often wrap the JSON in prose or a markdown fence, and do not always
//! respect the requested field shapes. This module extracts the object, checks
//! that every required field is present, and normalizes shapes where the
//! intent is unambiguous. Anything else is a typed failure; nothing is
//! defaulted.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::types::{Analysis, Priority, Sentiment};
use crate::error::PulseError;

/// Fields every analysis reply must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "sentiment",
    "priority",
    "suggested_actions",
    "improvement_suggestion",
];

/// First fenced block (optionally tagged `json`) wrapping a brace-delimited object.
static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fenced JSON regex")
});

/// Returns the object inside the first JSON fence, or the whole reply if none.
///
/// # Examples
///
/// ```
/// use pulse_core::ai::parse::extract_json_block;
///
/// assert_eq!(extract_json_block("Result:\n```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(extract_json_block("{\"a\": 1}"), "{\"a\": 1}");
/// ```
#[must_use]
pub fn extract_json_block(raw: &str) -> &str {
    FENCED_JSON
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
}

/// Splits a newline-delimited list into trimmed, non-empty lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn invalid(field: &str, value: &Value) -> PulseError {
    PulseError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        raw: None,
    }
}

fn string_field<'a>(obj: &'a Map<String, Value>, field: &str) -> crate::Result<&'a str> {
    let value = &obj[field];
    value.as_str().ok_or_else(|| invalid(field, value))
}

fn string_list(field: &str, items: &[Value]) -> crate::Result<Vec<String>> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(ToString::to_string)
                .ok_or_else(|| invalid(field, item))
        })
        .collect()
}

fn parse_actions(value: &Value) -> crate::Result<Vec<String>> {
    match value {
        Value::String(text) => Ok(split_lines(text)),
        Value::Array(items) => string_list("suggested_actions", items),
        other => Err(invalid("suggested_actions", other)),
    }
}

fn parse_suggestion(value: &Value) -> crate::Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Array(items) => Ok(string_list("improvement_suggestion", items)?.join("\n")),
        other => Err(invalid("improvement_suggestion", other)),
    }
}

/// Checks field types and enum values of an object with every required field.
fn validate(obj: &Map<String, Value>) -> crate::Result<Analysis> {
    let sentiment: Sentiment = string_field(obj, "sentiment")?
        .trim()
        .to_lowercase()
        .parse()?;
    let priority: Priority = string_field(obj, "priority")?
        .trim()
        .to_lowercase()
        .parse()?;

    Ok(Analysis {
        sentiment,
        priority,
        suggested_actions: parse_actions(&obj["suggested_actions"])?,
        improvement_suggestion: parse_suggestion(&obj["improvement_suggestion"])?,
    })
}

/// Parses a model reply into a validated [`Analysis`].
///
/// Enum values are matched after trimming and lowercasing; anything outside
/// the allowed sets is rejected.
///
/// # Errors
///
/// - `PulseError::MalformedResponse` if no JSON can be parsed
/// - `PulseError::IncompleteResponse` naming the first missing or null field
/// - `PulseError::InvalidFieldValue` for out-of-set enums or wrong field types
///
/// Every failure carries the full reply, see [`PulseError::raw_response`].
pub fn parse_analysis(raw: &str) -> crate::Result<Analysis> {
    let candidate = extract_json_block(raw);

    let value: Value = serde_json::from_str(candidate).map_err(|source| {
        warn!(error = %source, response_length = raw.len(), "AI response is not valid JSON");
        PulseError::MalformedResponse {
            raw: raw.to_string(),
            source,
        }
    })?;

    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| obj.get(**field).is_none_or(Value::is_null))
    {
        warn!(field = %missing, "AI response is missing a required field");
        return Err(PulseError::IncompleteResponse {
            field: (*missing).to_string(),
            raw: raw.to_string(),
        });
    }

    let analysis = validate(obj).map_err(|e| {
        warn!(error = %e, "AI response has an invalid field value");
        e.with_raw_response(raw)
    })?;
    debug!(
        sentiment = %analysis.sentiment,
        priority = %analysis.priority,
        actions = analysis.suggested_actions.len(),
        "Parsed AI analysis"
    );

    Ok(analysis)
}
