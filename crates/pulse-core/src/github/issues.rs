// SPDX-License-Identifier: Apache-2.0

//! GitHub issue and comment fetching.
//!
//! Talks to the REST API through octocrab with a bearer token. Comments are
//! paged sequentially because the existence of page N+1 is only known once page
//! N has come back.

use std::future::Future;

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::SecretString;
use tracing::{debug, instrument};

use super::IssueTracker;
use super::types::{Comment, Issue, IssueState};
use crate::config::GitHubConfig;
use crate::error::PulseError;

/// Issue tracker backed by the GitHub REST API.
pub struct GitHubTracker {
    client: Octocrab,
    owner: String,
    repo: String,
    per_page: u8,
}

impl GitHubTracker {
    /// Creates a tracker for the repository named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::GitHub` if the base URI is invalid or the client
    /// cannot be built.
    pub fn new(token: SecretString, config: &GitHubConfig) -> crate::Result<Self> {
        let client = octocrab::OctocrabBuilder::new()
            .personal_token(token)
            .base_uri(config.api_base.as_str())?
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Wraps an already configured octocrab client.
    #[must_use]
    pub fn with_client(client: Octocrab, config: &GitHubConfig) -> Self {
        Self {
            client,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            per_page: config.per_page,
        }
    }

    /// Returns `owner/repo` for the target repository.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Returns `true` when an octocrab error is a GitHub 404.
fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}

fn issue_from_model(model: octocrab::models::issues::Issue) -> Issue {
    let state = match model.state {
        octocrab::models::IssueState::Closed => IssueState::Closed,
        _ => IssueState::Open,
    };

    Issue {
        number: model.number,
        title: model.title,
        body: model.body.unwrap_or_default(),
        creator: model.user.login,
        created_at: model.created_at,
        state,
    }
}

fn comment_from_model(model: octocrab::models::issues::Comment) -> Comment {
    Comment {
        author: model.user.login,
        body: model.body.unwrap_or_default(),
        created_at: model.created_at,
    }
}

/// Fetches pages starting at 1 until a page is empty or shorter than `per_page`.
///
/// Pages are requested one at a time, in order.
pub async fn collect_pages<T, F, Fut>(per_page: u8, mut fetch_page: F) -> crate::Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = crate::Result<Vec<T>>>,
{
    let mut all = Vec::new();
    let mut page: u32 = 1;

    loop {
        let items = fetch_page(page).await?;
        let count = items.len();
        debug!(page, count, "Fetched page");

        if count == 0 {
            break;
        }
        all.extend(items);
        if count < usize::from(per_page) {
            break;
        }
        page += 1;
    }

    Ok(all)
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    #[instrument(skip(self), fields(repo = %self.full_name()))]
    async fn fetch_issue(&self, number: u64) -> crate::Result<Issue> {
        debug!("Fetching issue details");

        let issue = self
            .client
            .issues(&self.owner, &self.repo)
            .get(number)
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    PulseError::NotFound { number }
                } else {
                    PulseError::GitHub {
                        message: format!(
                            "Failed to fetch issue #{number} from {}: {e}",
                            self.full_name()
                        ),
                    }
                }
            })?;

        let issue = issue_from_model(issue);
        debug!(state = %issue.state, "Fetched issue");
        Ok(issue)
    }

    #[instrument(skip(self), fields(repo = %self.full_name()))]
    async fn fetch_comments(&self, number: u64) -> crate::Result<Vec<Comment>> {
        let comments = collect_pages(self.per_page, |page| async move {
            let response = self
                .client
                .issues(&self.owner, &self.repo)
                .list_comments(number)
                .per_page(self.per_page)
                .page(page)
                .send()
                .await
                .map_err(|e| PulseError::GitHub {
                    message: format!("Failed to fetch comments for issue #{number}: {e}"),
                })?;
            Ok(response.items.into_iter().map(comment_from_model).collect())
        })
        .await?;

        debug!(count = comments.len(), "Fetched comments");
        Ok(comments)
    }
}
