//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid value that can be customized.

use crate::domain::entities::ContactMessage;
use crate::domain::ports::{
    GithubEvent, GithubEventCommit, GithubEventPayload, GithubRepo, LeetCodeCounts,
    LeetCodeSubmission,
};

/// Create a test repository owned by `octocat`
pub fn test_repo(name: &str, stars: u64, forks: u64) -> GithubRepo {
    GithubRepo {
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        owner: "octocat".to_string(),
        stargazers_count: stars,
        forks_count: forks,
    }
}

/// Create a push event with `commits` commits
pub fn test_push_event(id: &str, repo_name: &str, commits: usize) -> GithubEvent {
    GithubEvent {
        id: id.to_string(),
        event_type: "PushEvent".to_string(),
        repo_name: repo_name.to_string(),
        created_at: Some("2024-05-01T10:00:00Z".to_string()),
        payload: GithubEventPayload {
            size: commits as u64,
            distinct_size: commits as u64,
            commits: (0..commits)
                .map(|i| GithubEventCommit {
                    sha: format!("{:040x}", i + 1),
                    message: format!("Commit {} in push {}", i, id),
                })
                .collect(),
        },
    }
}

/// Create realistic LeetCode counts
pub fn test_counts() -> LeetCodeCounts {
    LeetCodeCounts {
        total_solved: 320,
        total_questions: 3100,
        easy_solved: 150,
        easy_total: 780,
        medium_solved: 140,
        medium_total: 1620,
        hard_solved: 30,
        hard_total: 700,
    }
}

/// Create a submission with a fixed timestamp
pub fn test_submission(title: &str, status: &str, difficulty: Option<&str>) -> LeetCodeSubmission {
    LeetCodeSubmission {
        title: title.to_string(),
        status: status.to_string(),
        difficulty: difficulty.map(|d| d.to_string()),
        timestamp: Some("1700000000".to_string()),
    }
}

/// Create a valid contact message
pub fn test_contact_message() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "I liked your portfolio.".to_string(),
    }
}
