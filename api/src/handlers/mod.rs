//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod stats;

pub use contact::post_contact;
pub use stats::{get_github_stats, get_leetcode_stats};
