//! Fake upstream server
//!
//! A local axum server standing in for GitHub, the LeetCode statistics
//! APIs and Resend. Each upstream lives under its own path prefix.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub const GITHUB_PREFIX: &str = "/github";
pub const LEETCODE_STATS_PREFIX: &str = "/leetcode-stats";
pub const LEETCODE_PREFIX: &str = "/leetcode";
pub const RESEND_PREFIX: &str = "/resend";

/// Which upstreams should fail
#[derive(Debug, Clone, Default)]
pub struct UpstreamBehavior {
    pub github_down: bool,
    /// Status the GitHub profile endpoint answers with instead of the profile
    pub github_status: Option<StatusCode>,
    /// `x-ratelimit-remaining` sent along with `github_status`
    pub github_rate_limit_remaining: Option<&'static str>,
    /// Serve this many generated repositories, paged like GitHub
    pub github_repo_count: Option<usize>,
    pub leetcode_down: bool,
    pub submissions_down: bool,
    pub resend_down: bool,
}

#[derive(Clone)]
struct FakeState {
    behavior: UpstreamBehavior,
    emails: Arc<Mutex<Vec<Value>>>,
    repo_pages: Arc<AtomicUsize>,
}

/// Handle to a running fake upstream
pub struct FakeUpstream {
    pub base_url: String,
    emails: Arc<Mutex<Vec<Value>>>,
    repo_pages: Arc<AtomicUsize>,
}

impl FakeUpstream {
    /// Bind to an ephemeral port and serve in the background
    pub async fn start(behavior: UpstreamBehavior) -> Self {
        let emails = Arc::new(Mutex::new(Vec::new()));
        let repo_pages = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            behavior,
            emails: emails.clone(),
            repo_pages: repo_pages.clone(),
        };

        let github = Router::new()
            .route("/users/:user", get(github_user))
            .route("/users/:user/repos", get(github_repos))
            .route("/users/:user/events/public", get(github_events))
            .route("/repos/:owner/:repo/languages", get(github_languages));

        let app = Router::new()
            .nest(GITHUB_PREFIX, github)
            .route(
                &format!("{}/:user", LEETCODE_STATS_PREFIX),
                get(leetcode_stats),
            )
            .route(
                &format!("{}/:user/submission", LEETCODE_PREFIX),
                get(leetcode_submissions),
            )
            .route(&format!("{}/emails", RESEND_PREFIX), post(resend_send))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            emails,
            repo_pages,
        }
    }

    /// Request bodies received by the fake Resend endpoint
    pub fn emails(&self) -> Vec<Value> {
        self.emails.lock().unwrap().clone()
    }

    /// Repository list pages requested so far
    pub fn repo_pages_served(&self) -> usize {
        self.repo_pages.load(Ordering::SeqCst)
    }
}

fn unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"message": "upstream down"})),
    )
        .into_response()
}

async fn github_user(State(state): State<FakeState>, Path(user): Path<String>) -> Response {
    if state.behavior.github_down {
        return unavailable();
    }
    if let Some(status) = state.behavior.github_status {
        let mut headers = HeaderMap::new();
        if let Some(remaining) = state.behavior.github_rate_limit_remaining {
            headers.insert("x-ratelimit-remaining", remaining.parse().unwrap());
        }
        return (status, headers, Json(json!({"message": "denied"}))).into_response();
    }
    Json(json!({
        "login": user,
        "name": "The Octocat",
        "public_repos": 3,
        "followers": 42,
        "html_url": format!("https://github.com/{}", user),
    }))
    .into_response()
}

#[derive(Deserialize)]
struct PageQuery {
    per_page: Option<usize>,
    page: Option<usize>,
}

async fn github_repos(
    State(state): State<FakeState>,
    Path(user): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    state.repo_pages.fetch_add(1, Ordering::SeqCst);

    if let Some(count) = state.behavior.github_repo_count {
        let per_page = query.per_page.unwrap_or(30);
        let start = (query.page.unwrap_or(1) - 1) * per_page;
        let repos: Vec<Value> = (start..count.min(start + per_page))
            .map(|i| {
                json!({
                    "name": format!("repo-{}", i),
                    "full_name": format!("{}/repo-{}", user, i),
                    "owner": {"login": user},
                    "stargazers_count": 1
                })
            })
            .collect();
        return Json(repos).into_response();
    }

    Json(json!([
        {
            "name": "alpha",
            "full_name": format!("{}/alpha", user),
            "owner": {"login": user},
            "html_url": format!("https://github.com/{}/alpha", user),
            "stargazers_count": 5,
            "forks_count": 1,
            "fork": false
        },
        {
            "name": "beta",
            "full_name": format!("{}/beta", user),
            "owner": {"login": user},
            "html_url": format!("https://github.com/{}/beta", user),
            "stargazers_count": 2,
            "fork": false
        },
        {
            "name": "gamma",
            "full_name": format!("{}/gamma", user),
            "owner": {"login": user},
            "stargazers_count": 0,
            "forks_count": 4,
            "fork": true
        }
    ]))
    .into_response()
}

async fn github_events(Path(user): Path<String>) -> Response {
    Json(json!([
        {
            "id": "3",
            "type": "PushEvent",
            "repo": {"name": format!("{}/alpha", user)},
            "created_at": "2024-05-03T10:00:00Z",
            "payload": {
                "size": 2,
                "distinct_size": 1,
                "commits": [
                    {"sha": "aaa111", "message": "Add parser"},
                    {"sha": "bbb222", "message": "Fix tests"}
                ]
            }
        },
        {
            "id": "2",
            "type": "WatchEvent",
            "repo": {"name": "someone/else"},
            "created_at": "2024-05-02T10:00:00Z",
            "payload": {"action": "started"}
        },
        {
            "id": "1",
            "type": "PushEvent",
            "repo": {"name": format!("{}/beta", user)},
            "created_at": "2024-05-01T10:00:00Z",
            "payload": {"size": 0}
        }
    ]))
    .into_response()
}

async fn github_languages(Path((_owner, repo)): Path<(String, String)>) -> Response {
    match repo.as_str() {
        "alpha" => Json(json!({"Rust": 300, "TypeScript": 100})).into_response(),
        "beta" => Json(json!({"Rust": 100})).into_response(),
        _ => unavailable(),
    }
}

async fn leetcode_stats(State(state): State<FakeState>) -> Response {
    if state.behavior.leetcode_down {
        return unavailable();
    }
    Json(json!({
        "status": "success",
        "message": "retrieved",
        "totalSolved": 320,
        "totalQuestions": 3100,
        "easySolved": 150,
        "totalEasy": 780,
        "mediumSolved": 140,
        "totalMedium": 1620,
        "hardSolved": 30,
        "totalHard": 700
    }))
    .into_response()
}

async fn leetcode_submissions(State(state): State<FakeState>) -> Response {
    if state.behavior.submissions_down {
        return unavailable();
    }
    Json(json!({
        "count": 3,
        "submission": [
            {"title": "Two Sum", "statusDisplay": "Accepted", "timestamp": "1700000000", "lang": "rust"},
            {"title": "LRU Cache", "statusDisplay": "Wrong Answer", "timestamp": "1699990000", "lang": "rust"},
            {"title": "Merge Intervals", "statusDisplay": "Accepted", "difficulty": "Medium", "timestamp": "1699980000", "lang": "rust"}
        ]
    }))
    .into_response()
}

async fn resend_send(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if state.behavior.resend_down {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"name": "application_error", "message": "down"})),
        )
            .into_response();
    }

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Bearer "))
        .unwrap_or(false);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"name": "missing_api_key"})),
        )
            .into_response();
    }

    state.emails.lock().unwrap().push(body);
    Json(json!({"id": "email_123"})).into_response()
}
