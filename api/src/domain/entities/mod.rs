//! Domain entities
//!
//! Pure domain models: the display DTOs served to the site and the
//! validated contact message.

pub mod contact;
pub mod problem_stats;
pub mod repo_stats;

pub use contact::{ContactForm, ContactMessage};
pub use problem_stats::{ProblemStats, RecentSubmission, MAX_SUBMISSIONS, UNKNOWN_DIFFICULTY};
pub use repo_stats::{
    merge_language_bytes, rank_languages, ActivityItem, ActivityRepo, CommitSummary,
    RepoStatsSummary, MAX_ACTIVITY,
};
