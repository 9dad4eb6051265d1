//! LeetCode statistics client implementation
//!
//! Counts come from leetcode-stats-api; recent submissions come from
//! alfa-leetcode-api. Both are community proxies of LeetCode's GraphQL API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use urlencoding::encode;

use crate::domain::ports::{LeetCodeClient, LeetCodeCounts, LeetCodeSubmission};
use crate::error::LeetCodeError;

const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Submissions requested from the feed; accepted ones are filtered later
const SUBMISSION_LIMIT: usize = 20;

/// Implementation of the LeetCode statistics client
pub struct LeetCodeClientImpl {
    http: Client,
    stats_url: String,
    submissions_url: String,
}

impl LeetCodeClientImpl {
    pub fn new(
        stats_url: String,
        submissions_url: String,
        timeout: Duration,
    ) -> Result<Self, LeetCodeError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            stats_url: stats_url.trim_end_matches('/').to_string(),
            submissions_url: submissions_url.trim_end_matches('/').to_string(),
        })
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, LeetCodeError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| LeetCodeError::Malformed(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(LeetCodeError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Accept numbers that arrive as JSON numbers or numeric strings
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    Ok(
        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => Some(n),
            Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}

/// Response types from the statistics API
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    status: Option<String>,
    message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    total_solved: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    total_questions: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    easy_solved: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    total_easy: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    medium_solved: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    total_medium: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    hard_solved: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    total_hard: Option<u32>,
}

impl TryFrom<StatsResponse> for LeetCodeCounts {
    type Error = LeetCodeError;

    fn try_from(r: StatsResponse) -> Result<Self, Self::Error> {
        if let Some(status) = r.status.as_deref() {
            if !status.eq_ignore_ascii_case("success") {
                return Err(LeetCodeError::Upstream(
                    r.message.unwrap_or_else(|| status.to_string()),
                ));
            }
        }

        let (Some(total_solved), Some(total_questions)) = (r.total_solved, r.total_questions)
        else {
            return Err(LeetCodeError::Malformed(
                "missing totalSolved or totalQuestions".to_string(),
            ));
        };

        Ok(LeetCodeCounts {
            total_solved,
            total_questions,
            easy_solved: r.easy_solved.unwrap_or(0),
            easy_total: r.total_easy.unwrap_or(0),
            medium_solved: r.medium_solved.unwrap_or(0),
            medium_total: r.total_medium.unwrap_or(0),
            hard_solved: r.hard_solved.unwrap_or(0),
            hard_total: r.total_hard.unwrap_or(0),
        })
    }
}

#[derive(Deserialize)]
struct SubmissionsResponse {
    #[serde(default)]
    submission: Vec<SubmissionResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    status_display: String,
    difficulty: Option<String>,
    timestamp: Option<serde_json::Value>,
}

impl From<SubmissionResponse> for LeetCodeSubmission {
    fn from(r: SubmissionResponse) -> Self {
        LeetCodeSubmission {
            title: r.title,
            status: r.status_display,
            difficulty: r.difficulty.filter(|d| !d.trim().is_empty()),
            timestamp: r.timestamp.and_then(|v| match v {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
    }
}

#[async_trait]
impl LeetCodeClient for LeetCodeClientImpl {
    async fn get_counts(&self, username: &str) -> Result<LeetCodeCounts, LeetCodeError> {
        let resp = self
            .http
            .get(format!("{}/{}", self.stats_url, encode(username)))
            .send()
            .await?;

        let stats: StatsResponse = self.handle_response(resp).await?;
        stats.try_into()
    }

    async fn recent_submissions(
        &self,
        username: &str,
    ) -> Result<Vec<LeetCodeSubmission>, LeetCodeError> {
        let resp = self
            .http
            .get(format!(
                "{}/{}/submission?limit={}",
                self.submissions_url,
                encode(username),
                SUBMISSION_LIMIT
            ))
            .send()
            .await?;

        let feed: SubmissionsResponse = self.handle_response(resp).await?;
        Ok(feed.submission.into_iter().map(|s| s.into()).collect())
    }
}
