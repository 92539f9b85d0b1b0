use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// A single observation of commit activity: one raw commit or a pre-aggregated count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEvent {
    pub timestamp: DateTime<Utc>,
    pub count: u32,
}

impl CommitEvent {
    pub fn new(timestamp: DateTime<Utc>, count: u32) -> Self {
        Self { timestamp, count }
    }

    /// One raw commit at `timestamp`.
    pub fn single(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp, 1)
    }
}

/// Half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window ending at `now` that reaches back `lookback`, but never before `created_at`.
    /// A `created_at` in the future collapses the window to zero width at `now`.
    pub fn lookback(created_at: DateTime<Utc>, now: DateTime<Utc>, lookback: TimeDelta) -> Self {
        let earliest = now.checked_sub_signed(lookback).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let start = earliest.max(created_at).min(now);
        Self { start, end: now }
    }

    pub fn width(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        timestamp >= &self.start && timestamp < &self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    #[serde(rename = "date", with = "crate::util::iso_millis")]
    pub bucket_start: DateTime<Utc>,
    pub count: u32,
}

/// Commit count for one calendar day. `date` is absent when the caller only supplied counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "html_url")]
    pub url: String,
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
    #[serde(default, alias = "forks_count")]
    pub forks: u64,
    #[serde(default, alias = "open_issues_count")]
    pub issues: u64,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub website: String,
    /// Total pull request count as reported by the hosting service, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prs: Option<u64>,
    /// Total commit count as reported by the hosting service, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Public profile of the repository owner, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A commit as delivered by the fetch collaborator. The date stays raw so that
/// unparseable values can be skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default, alias = "timestamp")]
    pub date: Option<String>,
    #[serde(default, alias = "login")]
    pub author: Option<String>,
}

impl CommitRecord {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Repository metadata plus the recent commits fetched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    pub repo: RepoInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerProfile>,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}

impl RepoSnapshot {
    /// Commits with a usable timestamp, one event each.
    pub fn events(&self) -> Vec<CommitEvent> {
        self.commits
            .iter()
            .filter_map(CommitRecord::timestamp)
            .map(CommitEvent::single)
            .collect()
    }
}

/// One entry of a user's repository list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoListing {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default, skip_serializing)]
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub commits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub window: TimeWindow,
    pub bucket_width_secs: f64,
    pub buckets: Vec<HistogramBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub decay_rate: f64,
    pub days: Vec<CommitDay>,
    pub momentum: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repo: RepoInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerProfile>,
    pub total_commits: u64,
    pub commits: Vec<HistogramBucket>,
    pub daily: Vec<CommitDay>,
    pub momentum: Vec<f64>,
    pub top_contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub owner: Option<String>,
    pub best: Option<RepoListing>,
    pub repos: Vec<RepoListing>,
}
