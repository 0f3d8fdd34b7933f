// SPDX-License-Identifier: Apache-2.0

//! Shared, read-only handler state.

use std::sync::Arc;

use pulse_core::{AnalysisConfig, CompletionClient, IssueTracker};

/// Clients and settings built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Issue source.
    pub tracker: Arc<dyn IssueTracker>,
    /// Model client.
    pub client: Arc<dyn CompletionClient>,
    /// Corpus settings.
    pub analysis: AnalysisConfig,
}

impl AppState {
    /// Bundles the collaborators into shareable state.
    #[must_use]
    pub fn new(
        tracker: Arc<dyn IssueTracker>,
        client: Arc<dyn CompletionClient>,
        analysis: AnalysisConfig,
    ) -> Self {
        Self {
            tracker,
            client,
            analysis,
        }
    }
}
