//! Repository statistics domain entities
//!
//! Display-ready aggregates built from a GitHub account's profile,
//! repositories, language maps and public event feed.

use std::collections::HashMap;

use serde::Serialize;

/// Maximum number of languages in the breakdown
pub const MAX_LANGUAGES: usize = 5;

/// Maximum number of push events in the activity feed
pub const MAX_ACTIVITY: usize = 7;

/// Aggregated statistics for a GitHub account
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStatsSummary {
    pub total_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Proxied by repository count; the REST API has no contributions total
    pub total_contributions: u64,
    pub languages: Vec<LanguageStat>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Share of bytes written in one language across all repositories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    pub name: String,
    /// Rounded percentage, 0-100
    pub percentage: u32,
    /// Hex color, e.g. `#dea584`
    pub color: String,
}

/// One push event in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: ActivityRepo,
    pub created_at: Option<String>,
    pub commits: Vec<CommitSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRepo {
    pub name: String,
    pub url: String,
}

/// A commit inside a push event.
///
/// `additions` and `deletions` come from the push's aggregate `size` and
/// `distinct_size`, not from a per-commit diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitSummary {
    pub message: String,
    pub url: String,
    pub additions: u64,
    pub deletions: u64,
}

/// Sum language byte counts across repositories
pub fn merge_language_bytes<I>(maps: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = HashMap<String, u64>>,
{
    let mut totals: HashMap<String, u64> = HashMap::new();
    for map in maps {
        for (language, bytes) in map {
            *totals.entry(language).or_insert(0) += bytes;
        }
    }
    totals
}

/// Turn summed byte counts into the top languages by share.
///
/// `color_for` supplies the display color for each language. Ties keep the
/// order the map yields them in, which is unspecified.
pub fn rank_languages<F>(totals: &HashMap<String, u64>, mut color_for: F) -> Vec<LanguageStat>
where
    F: FnMut(&str) -> String,
{
    let total_bytes: u64 = totals.values().sum();
    if total_bytes == 0 {
        return Vec::new();
    }

    let mut languages: Vec<LanguageStat> = totals
        .iter()
        .map(|(name, bytes)| LanguageStat {
            name: name.clone(),
            percentage: percentage_of(*bytes, total_bytes),
            color: color_for(name),
        })
        .collect();

    languages.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    languages.truncate(MAX_LANGUAGES);
    languages
}

/// `round(part / total * 100)`, rounding halves away from zero
fn percentage_of(part: u64, total: u64) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}
