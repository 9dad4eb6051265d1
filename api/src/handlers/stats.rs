//! Statistics handlers
//!
//! Both endpoints always answer 200. Upstream failures degrade to zeroed or
//! fallback values so the site can render them like any other numbers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::{ProblemStats, RepoStatsSummary};
use crate::error::GithubError;
use crate::AppState;

/// Body of GET /api/github-stats
#[derive(Debug, Serialize)]
pub struct RepoStatsResponse {
    #[serde(flatten)]
    pub summary: RepoStatsSummary,
    /// Present only when the summary could not be built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RepoStatsResponse {
    pub fn success(summary: RepoStatsSummary) -> Self {
        Self {
            summary,
            error: None,
            message: None,
        }
    }

    /// Zeroed summary carrying the failure reason
    pub fn failure(err: &GithubError) -> Self {
        Self {
            summary: RepoStatsSummary::default(),
            error: Some("Failed to fetch GitHub stats".to_string()),
            message: Some(err.to_string()),
        }
    }
}

/// GET /api/github-stats
///
/// Repository totals, top languages and recent pushes for the configured account.
pub async fn get_github_stats(State(state): State<AppState>) -> Json<RepoStatsResponse> {
    match state.repo_stats_service.summarize().await {
        Ok(summary) => Json(RepoStatsResponse::success(summary)),
        Err(e) => {
            tracing::warn!("GitHub stats unavailable: {}", e);
            Json(RepoStatsResponse::failure(&e))
        }
    }
}

/// GET /api/leetcode-stats
///
/// Solved counts and recent accepted submissions for the configured handle.
pub async fn get_leetcode_stats(State(state): State<AppState>) -> Json<ProblemStats> {
    let stats = state
        .problem_stats_service
        .summarize()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("LeetCode stats unavailable, serving fallback: {}", e);
            ProblemStats::fallback()
        });

    Json(stats)
}
