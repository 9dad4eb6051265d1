use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Account whose repositories feed the GitHub stats endpoint
    pub github_username: String,
    /// Personal access token; unauthenticated calls are rate limited harder
    pub github_token: Option<String>,
    pub github_api_url: String,
    /// Handle whose solved problems feed the LeetCode stats endpoint
    pub leetcode_username: String,
    pub leetcode_stats_url: String,
    pub leetcode_submissions_url: String,
    /// Resend API key for contact form delivery
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub contact_from_email: String,
    /// Inbox that receives contact form submissions
    pub contact_to_email: Option<String>,
    pub upstream_timeout: Duration,
    pub language_fetch_timeout: Duration,
    pub rate_limit_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_var("PORT").unwrap_or(8080),
            github_username: env::var("GITHUB_USERNAME")
                .unwrap_or_else(|_| "octocat".to_string()),
            github_token: non_empty_var("GITHUB_TOKEN"),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            leetcode_username: env::var("LEETCODE_USERNAME")
                .unwrap_or_else(|_| "leetcode".to_string()),
            leetcode_stats_url: env::var("LEETCODE_STATS_URL")
                .unwrap_or_else(|_| "https://leetcode-stats-api.herokuapp.com".to_string()),
            leetcode_submissions_url: env::var("LEETCODE_SUBMISSIONS_URL")
                .unwrap_or_else(|_| "https://alfa-leetcode-api.onrender.com".to_string()),
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            contact_from_email: env::var("CONTACT_FROM_EMAIL")
                .unwrap_or_else(|_| "Portfolio <onboarding@resend.dev>".to_string()),
            contact_to_email: non_empty_var("CONTACT_TO_EMAIL"),
            upstream_timeout: Duration::from_secs(
                parse_var("UPSTREAM_TIMEOUT_SECS").unwrap_or(10),
            ),
            language_fetch_timeout: Duration::from_secs(
                parse_var("LANGUAGE_FETCH_TIMEOUT_SECS").unwrap_or(5),
            ),
            rate_limit_enabled: parse_var("RATE_LIMIT_ENABLED").unwrap_or(true),
        }
    }

    /// Check if contact form delivery is configured
    pub fn mailer_enabled(&self) -> bool {
        self.resend_api_key.is_some() && self.contact_to_email.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
impl Config {
    /// Configuration pointing every upstream at a fake server on `base_url`
    pub fn for_upstream(base_url: &str) -> Self {
        use crate::test_utils::{
            GITHUB_PREFIX, LEETCODE_PREFIX, LEETCODE_STATS_PREFIX, RESEND_PREFIX,
        };

        Self {
            port: 0,
            github_username: "octocat".to_string(),
            github_token: Some("test-token".to_string()),
            github_api_url: format!("{}{}", base_url, GITHUB_PREFIX),
            leetcode_username: "solver".to_string(),
            leetcode_stats_url: format!("{}{}", base_url, LEETCODE_STATS_PREFIX),
            leetcode_submissions_url: format!("{}{}", base_url, LEETCODE_PREFIX),
            resend_api_key: Some("re_test".to_string()),
            resend_api_url: format!("{}{}", base_url, RESEND_PREFIX),
            contact_from_email: "Portfolio <noreply@example.com>".to_string(),
            contact_to_email: Some("owner@example.com".to_string()),
            upstream_timeout: Duration::from_secs(5),
            language_fetch_timeout: Duration::from_secs(2),
            rate_limit_enabled: false,
        }
    }
}
