//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod leetcode;
pub mod resend;

pub use github::GithubClientImpl;
pub use leetcode::LeetCodeClientImpl;
pub use resend::ResendMailer;
