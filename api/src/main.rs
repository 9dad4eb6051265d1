//! Portfolio API Server
//!
//! Backend for the portfolio site: GitHub and LeetCode statistics for the
//! stats widgets, and contact form delivery.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;



use adapters::{GithubClientImpl, LeetCodeClientImpl, ResendMailer};
use app::{ContactService, ProblemStatsService, RepoStatsService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo_stats_service: Arc<RepoStatsService<GithubClientImpl>>,
    pub problem_stats_service: Arc<ProblemStatsService<LeetCodeClientImpl>>,
    pub contact_service: Arc<ContactService<ResendMailer>>,
    pub config: Config,
}

impl AppState {
    /// Create adapters and services from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let github_client = Arc::new(
            GithubClientImpl::new(
                config.github_api_url.clone(),
                config.github_token.clone(),
                config.upstream_timeout,
            )
            .context("Failed to build GitHub client")?,
        );

        let leetcode_client = Arc::new(
            LeetCodeClientImpl::new(
                config.leetcode_stats_url.clone(),
                config.leetcode_submissions_url.clone(),
                config.upstream_timeout,
            )
            .context("Failed to build LeetCode client")?,
        );

        let mailer = Arc::new(
            ResendMailer::new(
                config.resend_api_url.clone(),
                config.resend_api_key.clone(),
                config.upstream_timeout,
            )
            .context("Failed to build Resend client")?,
        );

        let repo_stats_service = Arc::new(RepoStatsService::new(
            github_client,
            config.github_username.clone(),
            config.language_fetch_timeout,
        ));

        let problem_stats_service = Arc::new(ProblemStatsService::new(
            leetcode_client,
            config.leetcode_username.clone(),
        ));

        let contact_service = Arc::new(ContactService::new(
            mailer,
            config.contact_from_email.clone(),
            config.contact_to_email.clone(),
        ));

        Ok(Self {
            repo_stats_service,
            problem_stats_service,
            contact_service,
            config,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let mut contact_routes: Router<AppState> =
        Router::new().route("/api/contact", post(handlers::post_contact));

    if state.config.rate_limit_enabled {
        // One request replenished every 30 seconds per peer IP, burst of 3.
        // PeerIpKeyExtractor needs ConnectInfo, see into_make_service_with_connect_info in main.
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(30)
                .burst_size(3)
                .finish()
                .context("Failed to build governor config")?,
        );

        contact_routes = contact_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Statistics widgets
        .route("/api/github-stats", get(handlers::get_github_stats))
        .route("/api/leetcode-stats", get(handlers::get_leetcode_stats))
        // Contact form
        .merge(contact_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio API...");

    // Load configuration
    let config = Config::from_env();
    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set, GitHub requests are unauthenticated");
    }
    if !config.mailer_enabled() {
        tracing::warn!("RESEND_API_KEY or CONTACT_TO_EMAIL not set, contact form will fail");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::from_config(config)?;
    let app = build_router(state)?;

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
