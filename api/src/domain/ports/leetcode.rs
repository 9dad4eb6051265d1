//! LeetCode client port trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LeetCodeError;

/// Solved and available problem counts by difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetCodeCounts {
    pub total_solved: u32,
    pub total_questions: u32,
    pub easy_solved: u32,
    pub easy_total: u32,
    pub medium_solved: u32,
    pub medium_total: u32,
    pub hard_solved: u32,
    pub hard_total: u32,
}

/// A submission from the recent submissions feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetCodeSubmission {
    pub title: String,
    /// Status as displayed by LeetCode, e.g. "Accepted", "Wrong Answer"
    pub status: String,
    pub difficulty: Option<String>,
    /// Unix seconds, as sent by the API
    pub timestamp: Option<String>,
}

impl LeetCodeSubmission {
    pub fn is_accepted(&self) -> bool {
        self.status.eq_ignore_ascii_case("accepted")
    }
}

/// Port trait for LeetCode statistics
#[async_trait]
pub trait LeetCodeClient: Send + Sync {
    /// Get solved counts for a handle
    async fn get_counts(&self, username: &str) -> Result<LeetCodeCounts, LeetCodeError>;

    /// Get recent submissions for a handle, newest first
    async fn recent_submissions(
        &self,
        username: &str,
    ) -> Result<Vec<LeetCodeSubmission>, LeetCodeError>;
}
