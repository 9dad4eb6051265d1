//! GitHub client port trait
//!
//! Defines the interface for reading an account's public GitHub data.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// GitHub user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub public_repos: u64,
}

/// GitHub repository representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub full_name: String,
    /// Owner login; the language endpoint is keyed by owner/name
    pub owner: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// An entry in a user's public event feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubEvent {
    pub id: String,
    pub event_type: String,
    /// `owner/name` of the repository the event belongs to
    pub repo_name: String,
    pub created_at: Option<String>,
    pub payload: GithubEventPayload,
}

impl GithubEvent {
    pub fn is_push(&self) -> bool {
        self.event_type == "PushEvent"
    }
}

/// Push-related payload fields. Other event kinds leave these at their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubEventPayload {
    /// Number of commits in the push
    pub size: u64,
    /// Number of distinct commits in the push
    pub distinct_size: u64,
    pub commits: Vec<GithubEventCommit>,
}

/// A commit listed in a push payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubEventCommit {
    pub sha: String,
    pub message: String,
}

/// Port trait for GitHub operations
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Get a user's profile
    async fn get_user(&self, username: &str) -> Result<GithubUser, GithubError>;

    /// List every repository owned by a user
    async fn list_user_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError>;

    /// List a user's public events, newest first
    async fn list_public_events(&self, username: &str) -> Result<Vec<GithubEvent>, GithubError>;

    /// Get bytes of code per language for a repository
    async fn get_repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>, GithubError>;
}
