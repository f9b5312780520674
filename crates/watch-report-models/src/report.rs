use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::movie::WatchedMovie;
use crate::series::WatchedSeries;
use crate::user::UserWatchRecord;

/// Base URLs of the three services, used to link report entries back to them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ServiceUrls {
    pub jellyfin_url: Option<String>,
    pub radarr_url: Option<String>,
    pub sonarr_url: Option<String>,
}

/// Cross-user watch report.
///
/// Built once per run and never mutated after it is handed to the web layer.
/// The six buckets are disjoint within their partition: a movie is in exactly
/// one movie bucket, and a series key appears in at most one "fully" bucket
/// and at most one "partially" bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Report {
    #[serde(default)]
    pub users: Vec<UserWatchRecord>,
    #[serde(default)]
    pub movies_watched_by_all: Vec<WatchedMovie>,
    #[serde(default)]
    pub movies_watched_by_some: Vec<WatchedMovie>,
    #[serde(default)]
    pub series_fully_watched_by_all: Vec<WatchedSeries>,
    #[serde(default)]
    pub series_fully_watched_by_some: Vec<WatchedSeries>,
    #[serde(default)]
    pub series_partially_watched_by_all: Vec<WatchedSeries>,
    #[serde(default)]
    pub series_partially_watched_by_some: Vec<WatchedSeries>,
    #[serde(flatten)]
    pub urls: ServiceUrls,
    #[serde(default)]
    pub generated_at: DateTime<Utc>,
    /// Collection steps that failed and were treated as empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Bucket sizes, for log lines and the CLI summary
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub users: usize,
    pub movies_watched_by_all: usize,
    pub movies_watched_by_some: usize,
    pub series_fully_watched_by_all: usize,
    pub series_fully_watched_by_some: usize,
    pub series_partially_watched_by_all: usize,
    pub series_partially_watched_by_some: usize,
}

impl Report {
    /// Report with no users and empty buckets, e.g. after a failed login
    pub fn empty(urls: ServiceUrls) -> Self {
        Self {
            urls,
            generated_at: Utc::now(),
            ..Default::default()
        }
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            users: self.users.len(),
            movies_watched_by_all: self.movies_watched_by_all.len(),
            movies_watched_by_some: self.movies_watched_by_some.len(),
            series_fully_watched_by_all: self.series_fully_watched_by_all.len(),
            series_fully_watched_by_some: self.series_fully_watched_by_some.len(),
            series_partially_watched_by_all: self.series_partially_watched_by_all.len(),
            series_partially_watched_by_some: self.series_partially_watched_by_some.len(),
        }
    }

    pub fn has_buckets(&self) -> bool {
        let s = self.summary();
        s.movies_watched_by_all
            + s.movies_watched_by_some
            + s.series_fully_watched_by_all
            + s.series_fully_watched_by_some
            + s.series_partially_watched_by_all
            + s.series_partially_watched_by_some
            > 0
    }
}
