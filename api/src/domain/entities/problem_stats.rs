//! Problem-solving statistics domain entities

use serde::Serialize;

/// Maximum number of accepted submissions shown
pub const MAX_SUBMISSIONS: usize = 5;

/// Difficulty label used when the feed omits one
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

/// Solved problem counts for a LeetCode handle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStats {
    pub total_solved: u32,
    pub total_questions: u32,
    pub easy_solved: u32,
    pub easy_total: u32,
    pub medium_solved: u32,
    pub medium_total: u32,
    pub hard_solved: u32,
    pub hard_total: u32,
    pub recent_submissions: Vec<RecentSubmission>,
}

impl ProblemStats {
    /// Values served when the statistics API is unavailable
    pub fn fallback() -> Self {
        Self {
            total_solved: 0,
            total_questions: 2500,
            easy_solved: 0,
            easy_total: 150,
            medium_solved: 0,
            medium_total: 150,
            hard_solved: 0,
            hard_total: 75,
            recent_submissions: Vec::new(),
        }
    }
}

/// An accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentSubmission {
    pub title: String,
    pub difficulty: String,
    pub date: String,
}
