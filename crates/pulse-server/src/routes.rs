// SPDX-License-Identifier: Apache-2.0

//! Request handlers.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use pulse_core::{AnalyzeOptions, IssueReport, analyze_issue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /analyze/{issue_number}`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeQuery {
    /// Also return key points.
    #[serde(default)]
    pub key_points: bool,
}

/// `GET /analyze/{issue_number}`
///
/// Malformed path or query values are answered with the same JSON error body
/// as analysis failures.
pub async fn analyze(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
) -> Result<Json<IssueReport>, ApiError> {
    let Path(issue_number) = path?;
    let Query(query) = query?;
    info!(issue_number, key_points = query.key_points, "Analyzing issue");

    let options = AnalyzeOptions {
        include_key_points: query.key_points,
    };
    let report = analyze_issue(
        state.tracker.as_ref(),
        state.client.as_ref(),
        &state.analysis,
        issue_number,
        options,
    )
    .await?;

    Ok(Json(report))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
