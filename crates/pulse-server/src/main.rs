// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the Pulse HTTP server.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pulse_core::{
    Credentials, EnvTokenProvider, GitHubTracker, OpenAiClient, load_config, load_config_from,
};
use pulse_server::cli::Args;
use pulse_server::logging::init_logging;
use pulse_server::{AppState, run_http};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging();

    let mut config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    args.apply(&mut config.server);

    let credentials =
        Credentials::resolve(&EnvTokenProvider).context("Cannot start without credentials")?;

    let tracker = GitHubTracker::new(credentials.github_token.clone(), &config.github)?;
    let client = OpenAiClient::new(credentials.ai_api_key.clone(), &config.ai)?;
    info!(
        repo = %tracker.full_name(),
        model = client.model(),
        "Clients ready"
    );

    let state = AppState::new(Arc::new(tracker), Arc::new(client), config.analysis.clone());
    run_http(&config.server, state).await
}
