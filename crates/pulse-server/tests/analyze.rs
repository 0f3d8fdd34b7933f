// SPDX-License-Identifier: Apache-2.0

//! Router tests driving requests through `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use pulse_core::{
    AnalysisConfig, Comment, CompletionClient, CompletionRequest, Issue, IssueState, IssueTracker,
    PulseError,
};
use pulse_server::{AppState, router};
use serde_json::Value;
use tower::ServiceExt;

const ANALYSIS: &str = "```json\n{\"sentiment\":\"very_frustrated\",\"priority\":\"high\",\"suggested_actions\":\"Reproduce on master\\nRequest a core dump\",\"improvement_suggestion\":\"Add the chip revision\"}\n```";

struct OneIssue {
    state: IssueState,
    comments: Vec<Comment>,
}

#[async_trait]
impl IssueTracker for OneIssue {
    async fn fetch_issue(&self, number: u64) -> pulse_core::Result<Issue> {
        match number {
            101 => Ok(Issue::builder()
                .number(101)
                .title("Watchdog reset in ISR")
                .body("Crash\n```\nE (42) task_wdt: triggered\n```")
                .creator("octo")
                .created_at(Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap())
                .state(self.state)
                .build()),
            500 => Err(PulseError::GitHub {
                message: "Bad credentials".to_string(),
            }),
            _ => Err(PulseError::NotFound { number }),
        }
    }

    async fn fetch_comments(&self, _number: u64) -> pulse_core::Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }
}

struct Replies {
    analysis: String,
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionClient for Replies {
    fn name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest) -> pulse_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.prompt.contains("Extract 3-5 key points") {
            Ok("1. Watchdog fires in ISR\n2. Happens on boot".to_string())
        } else {
            Ok(self.analysis.clone())
        }
    }
}

fn app_with(state: IssueState, comments: Vec<Comment>, analysis: &str) -> (axum::Router, Arc<Replies>) {
    let client = Arc::new(Replies {
        analysis: analysis.to_string(),
        calls: AtomicUsize::new(0),
    });
    let app_state = AppState::new(
        Arc::new(OneIssue { state, comments }),
        client.clone(),
        AnalysisConfig::default(),
    );
    let dir = std::env::temp_dir();
    (router(app_state, &dir), client)
}

fn app() -> axum::Router {
    app_with(IssueState::Open, Vec::new(), ANALYSIS).0
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn analyze_returns_report() {
    let (status, body) = get(app(), "/analyze/101").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue_number"], 101);
    assert_eq!(body["title"], "Watchdog reset in ISR");
    assert_eq!(body["creator"], "octo");
    assert_eq!(body["creation_date"], "2024-02-02T02:02:02Z");
    assert_eq!(body["state"], "open");
    assert_eq!(body["total_comments"], 0);
    assert_eq!(body["unique_users"], 0);
    assert_eq!(body["sentiment"], "very_frustrated");
    assert_eq!(body["priority"], "high");
    assert_eq!(
        body["suggested_actions"],
        serde_json::json!(["Reproduce on master", "Request a core dump"])
    );
    assert_eq!(body["improvement_suggestion"], "Add the chip revision");
    assert!(body.get("key_points").is_none());
}

#[tokio::test]
async fn key_points_are_opt_in() {
    let (app, client) = app_with(IssueState::Open, Vec::new(), ANALYSIS);
    let (status, body) = get(app, "/analyze/101?key_points=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["key_points"],
        serde_json::json!(["1. Watchdog fires in ISR", "2. Happens on boot"])
    );
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn closed_and_solved_issue_skips_the_model() {
    let comments = vec![Comment::new(
        "maintainer",
        "Fixed by disabling the ISR watchdog",
        Utc.with_ymd_and_hms(2024, 2, 3, 0, 0, 0).unwrap(),
    )];
    let (app, client) = app_with(IssueState::Closed, comments, ANALYSIS);
    let (status, body) = get(app, "/analyze/101").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "happy");
    assert_eq!(body["priority"], "low");
    assert_eq!(body["suggested_actions"][1], "Solution was provided by maintainer");
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_issue_is_404() {
    let (status, body) = get(app(), "/analyze/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Issue #7 not found");
}

#[tokio::test]
async fn tracker_failure_is_500() {
    let (status, body) = get(app(), "/analyze/500").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Bad credentials"));
}

#[tokio::test]
async fn incomplete_reply_is_500() {
    let (app, _) = app_with(IssueState::Open, Vec::new(), r#"{"sentiment":"happy"}"#);
    let (status, body) = get(app, "/analyze/101").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Missing required field: priority");
}

#[tokio::test]
async fn non_numeric_issue_is_rejected_as_json() {
    let (app, client) = app_with(IssueState::Open, Vec::new(), ANALYSIS);
    let (status, body) = get(app, "/analyze/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("JSON error body");
    assert!(!message.is_empty());
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bad_query_value_is_rejected_as_json() {
    let (status, body) = get(app(), "/analyze/101?key_points=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
