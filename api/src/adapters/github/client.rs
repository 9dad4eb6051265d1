//! GitHub REST API client implementation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Deserializer};
use urlencoding::encode;

use crate::domain::ports::{
    GithubClient, GithubEvent, GithubEventCommit, GithubEventPayload, GithubRepo, GithubUser,
};
use crate::error::GithubError;

const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Repositories requested per page
const PER_PAGE: usize = 100;

/// Upper bound on repository pages fetched
const MAX_REPO_PAGES: usize = 10;

/// Helper to deserialize null as default (empty vec, zero, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Implementation of the GitHub API client
pub struct GithubClientImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClientImpl {
    pub fn new(
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(self.api_url(path))
            .header(header::ACCEPT, "application/vnd.github+json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GithubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GithubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GithubError::Unauthorized)
        } else if status.as_u16() == 429 || is_rate_limit_exhausted(&response) {
            Err(GithubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GithubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub signals primary rate limit exhaustion with a 403 and zero remaining
fn is_rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false)
}

/// Response types from GitHub API
#[derive(Deserialize)]
struct GithubUserResponse {
    login: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    public_repos: u64,
}

impl From<GithubUserResponse> for GithubUser {
    fn from(r: GithubUserResponse) -> Self {
        GithubUser {
            login: r.login,
            public_repos: r.public_repos,
        }
    }
}

#[derive(Deserialize)]
struct GithubRepoResponse {
    name: String,
    full_name: String,
    owner: Option<GithubOwnerResponse>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    stargazers_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    forks_count: u64,
}

#[derive(Deserialize)]
struct GithubOwnerResponse {
    login: String,
}

impl From<GithubRepoResponse> for GithubRepo {
    fn from(r: GithubRepoResponse) -> Self {
        // full_name is always "owner/name"; fall back to it if owner is absent
        let owner = r.owner.map(|o| o.login).unwrap_or_else(|| {
            r.full_name
                .split_once('/')
                .map(|(owner, _)| owner.to_string())
                .unwrap_or_default()
        });

        GithubRepo {
            name: r.name,
            full_name: r.full_name,
            owner,
            stargazers_count: r.stargazers_count,
            forks_count: r.forks_count,
        }
    }
}

#[derive(Deserialize)]
struct GithubEventResponse {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    repo: GithubEventRepoResponse,
    created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    payload: GithubEventPayloadResponse,
}

#[derive(Deserialize)]
struct GithubEventRepoResponse {
    name: String,
}

#[derive(Default, Deserialize)]
struct GithubEventPayloadResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    size: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    distinct_size: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    commits: Vec<GithubEventCommitResponse>,
}

#[derive(Deserialize)]
struct GithubEventCommitResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    sha: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    message: String,
}

impl From<GithubEventResponse> for GithubEvent {
    fn from(r: GithubEventResponse) -> Self {
        GithubEvent {
            id: r.id,
            event_type: r.event_type,
            repo_name: r.repo.name,
            created_at: r.created_at,
            payload: GithubEventPayload {
                size: r.payload.size,
                distinct_size: r.payload.distinct_size,
                commits: r
                    .payload
                    .commits
                    .into_iter()
                    .map(|c| GithubEventCommit {
                        sha: c.sha,
                        message: c.message,
                    })
                    .collect(),
            },
        }
    }
}

#[async_trait]
impl GithubClient for GithubClientImpl {
    async fn get_user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let resp = self
            .get(&format!("/users/{}", encode(username)))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(GithubError::UserNotFound(username.to_string()));
        }

        let user: GithubUserResponse = self.handle_response(resp).await?;
        Ok(user.into())
    }

    async fn list_user_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let mut repos = Vec::new();

        for page in 1..=MAX_REPO_PAGES {
            let resp = self
                .get(&format!(
                    "/users/{}/repos?per_page={}&page={}",
                    encode(username),
                    PER_PAGE,
                    page
                ))
                .send()
                .await?;

            if resp.status().as_u16() == 404 {
                return Err(GithubError::UserNotFound(username.to_string()));
            }

            let batch: Vec<GithubRepoResponse> = self.handle_response(resp).await?;
            let last_page = batch.len() < PER_PAGE;
            repos.extend(batch.into_iter().map(GithubRepo::from));

            if last_page {
                break;
            }
        }

        Ok(repos)
    }

    async fn list_public_events(&self, username: &str) -> Result<Vec<GithubEvent>, GithubError> {
        let resp = self
            .get(&format!(
                "/users/{}/events/public?per_page={}",
                encode(username),
                PER_PAGE
            ))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(GithubError::UserNotFound(username.to_string()));
        }

        let events: Vec<GithubEventResponse> = self.handle_response(resp).await?;
        Ok(events.into_iter().map(|e| e.into()).collect())
    }

    async fn get_repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>, GithubError> {
        let resp = self
            .get(&format!("/repos/{}/{}/languages", encode(owner), encode(repo)))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(GithubError::RepoNotFound {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }

        self.handle_response(resp).await
    }
}
