//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod contact_service;
pub mod language_colors;
pub mod problem_stats_service;
pub mod repo_stats_service;

pub use contact_service::ContactService;
pub use problem_stats_service::ProblemStatsService;
pub use repo_stats_service::RepoStatsService;
