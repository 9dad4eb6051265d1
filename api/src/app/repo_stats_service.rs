//! Repository statistics service
//!
//! Aggregates a GitHub account into the summary shown on the portfolio:
//! repository, star and fork totals, a top-language breakdown, and the
//! most recent pushes.
//!
//! Profile, repository list and event feed are required; a failure in any
//! of them fails the whole summary. Per-repository language lookups are
//! best effort and run concurrently (at most `LANGUAGE_CONCURRENCY` in
//! flight), each under its own timeout.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::app::language_colors::color_for;
use crate::domain::entities::{
    merge_language_bytes, rank_languages, ActivityItem, ActivityRepo, CommitSummary,
    RepoStatsSummary, MAX_ACTIVITY,
};
use crate::domain::ports::{GithubClient, GithubEvent, GithubRepo};
use crate::error::GithubError;

/// Language lookups in flight at once
pub const LANGUAGE_CONCURRENCY: usize = 8;

/// Service for building repository statistics
pub struct RepoStatsService<GC>
where
    GC: GithubClient,
{
    github: Arc<GC>,
    username: String,
    language_timeout: Duration,
}

impl<GC> RepoStatsService<GC>
where
    GC: GithubClient,
{
    pub fn new(github: Arc<GC>, username: String, language_timeout: Duration) -> Self {
        Self {
            github,
            username,
            language_timeout,
        }
    }

    /// Build the summary for the configured account
    pub async fn summarize(&self) -> Result<RepoStatsSummary, GithubError> {
        let user = self.github.get_user(&self.username).await?;
        let repos = self.github.list_user_repos(&self.username).await?;

        let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
        let total_forks: u64 = repos.iter().map(|r| r.forks_count).sum();

        let events = self.github.list_public_events(&self.username).await?;
        let recent_activity = recent_pushes(events);

        let language_maps = self.fetch_language_maps(&repos).await;
        let totals = merge_language_bytes(language_maps);
        let languages = rank_languages(&totals, color_for);

        tracing::debug!(
            "Summarized {}: {} repos, {} stars, {} languages, {} pushes",
            user.login,
            repos.len(),
            total_stars,
            totals.len(),
            recent_activity.len()
        );

        Ok(RepoStatsSummary {
            total_repos: user.public_repos,
            total_stars,
            total_forks,
            total_contributions: user.public_repos,
            languages,
            recent_activity,
        })
    }

    /// Fetch every repository's language map, `LANGUAGE_CONCURRENCY` at a time.
    ///
    /// Results keep repository order. A failed or timed-out lookup yields an
    /// empty map.
    async fn fetch_language_maps(&self, repos: &[GithubRepo]) -> Vec<HashMap<String, u64>> {
        let lookups = repos.iter().map(|repo| async move {
            let lookup = self.github.get_repo_languages(&repo.owner, &repo.name);
            match tokio::time::timeout(self.language_timeout, lookup).await {
                Ok(Ok(languages)) => languages,
                Ok(Err(e)) => {
                    tracing::warn!("Failed to fetch languages for {}: {}", repo.full_name, e);
                    HashMap::new()
                }
                Err(_) => {
                    tracing::warn!(
                        "Language lookup for {} timed out after {:?}",
                        repo.full_name,
                        self.language_timeout
                    );
                    HashMap::new()
                }
            }
        })
        .collect::<Vec<_>>();

        stream::iter(lookups)
            .buffered(LANGUAGE_CONCURRENCY)
            .collect()
            .await
    }
}

/// Keep the newest push events, in feed order
pub fn recent_pushes(events: Vec<GithubEvent>) -> Vec<ActivityItem> {
    events
        .into_iter()
        .filter(GithubEvent::is_push)
        .take(MAX_ACTIVITY)
        .map(push_to_activity)
        .collect()
}

/// Map a push event to an activity item.
///
/// Every commit gets the push's `size`/`distinct_size` as its
/// additions/deletions; the event feed carries no per-commit diff stats.
pub fn push_to_activity(event: GithubEvent) -> ActivityItem {
    let repo_url = format!("https://github.com/{}", event.repo_name);
    let additions = event.payload.size;
    let deletions = event.payload.distinct_size;

    let commits = event
        .payload
        .commits
        .into_iter()
        .map(|commit| CommitSummary {
            url: if commit.sha.is_empty() {
                repo_url.clone()
            } else {
                format!("{}/commit/{}", repo_url, commit.sha)
            },
            message: commit.message,
            additions,
            deletions,
        })
        .collect();

    ActivityItem {
        id: event.id,
        event_type: event.event_type,
        repo: ActivityRepo {
            name: event.repo_name,
            url: repo_url,
        },
        created_at: event.created_at,
        commits,
    }
}
