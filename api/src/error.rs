//! Unified error types for the Portfolio API
//!
//! This module defines error types for each layer:
//! - `GithubError`: GitHub REST API client errors
//! - `LeetCodeError`: LeetCode statistics API errors
//! - `MailerError`: transactional email provider errors
//! - `ContactError`: contact form validation errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Repository not found: {owner}/{repo}")]
    RepoNotFound { owner: String, repo: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// LeetCode statistics API errors
#[derive(Debug, Error)]
pub enum LeetCodeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Upstream reported failure: {0}")]
    Upstream(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Email provider errors
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Mailer not configured: {0}")]
    NotConfigured(&'static str),
}

/// Contact form validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Contact(#[from] ContactError),

    #[error("Mailer error: {0}")]
    Mailer(#[from] MailerError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Contact(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            AppError::Mailer(e) => {
                tracing::error!("Mailer error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email".to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
