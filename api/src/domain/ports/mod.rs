//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod leetcode;
pub mod mailer;

pub use github::{
    GithubClient, GithubEvent, GithubEventCommit, GithubEventPayload, GithubRepo, GithubUser,
};
pub use leetcode::{LeetCodeClient, LeetCodeCounts, LeetCodeSubmission};
pub use mailer::{Mailer, OutgoingEmail};
