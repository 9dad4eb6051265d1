//! Problem-solving statistics service
//!
//! Solved counts are required; the recent submissions list is an optional
//! enrichment and degrades to empty on failure.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat};

use crate::domain::entities::{ProblemStats, RecentSubmission, MAX_SUBMISSIONS, UNKNOWN_DIFFICULTY};
use crate::domain::ports::{LeetCodeClient, LeetCodeSubmission};
use crate::error::LeetCodeError;

/// Service for building problem-solving statistics
pub struct ProblemStatsService<LC>
where
    LC: LeetCodeClient,
{
    leetcode: Arc<LC>,
    username: String,
}

impl<LC> ProblemStatsService<LC>
where
    LC: LeetCodeClient,
{
    pub fn new(leetcode: Arc<LC>, username: String) -> Self {
        Self { leetcode, username }
    }

    /// Build statistics for the configured handle
    pub async fn summarize(&self) -> Result<ProblemStats, LeetCodeError> {
        let counts = self.leetcode.get_counts(&self.username).await?;

        let recent_submissions = match self.leetcode.recent_submissions(&self.username).await {
            Ok(submissions) => accepted_submissions(submissions),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch recent submissions for {}: {}",
                    self.username,
                    e
                );
                Vec::new()
            }
        };

        Ok(ProblemStats {
            total_solved: counts.total_solved,
            total_questions: counts.total_questions,
            easy_solved: counts.easy_solved,
            easy_total: counts.easy_total,
            medium_solved: counts.medium_solved,
            medium_total: counts.medium_total,
            hard_solved: counts.hard_solved,
            hard_total: counts.hard_total,
            recent_submissions,
        })
    }
}

/// Keep the newest accepted submissions, in feed order
pub fn accepted_submissions(submissions: Vec<LeetCodeSubmission>) -> Vec<RecentSubmission> {
    submissions
        .into_iter()
        .filter(LeetCodeSubmission::is_accepted)
        .take(MAX_SUBMISSIONS)
        .map(|s| RecentSubmission {
            date: s.timestamp.as_deref().map(format_timestamp).unwrap_or_default(),
            difficulty: s
                .difficulty
                .unwrap_or_else(|| UNKNOWN_DIFFICULTY.to_string()),
            title: s.title,
        })
        .collect()
}

/// Render unix seconds as RFC 3339 UTC; unparseable values pass through
fn format_timestamp(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| raw.to_string())
}
