use serde::{Deserialize, Serialize};
use crate::item_key::ItemKey;

/// Episode counts for one series as seen by one user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SeriesProgress {
    pub watched: u32,
    pub total: u32,
}

impl SeriesProgress {
    pub fn new(watched: u32, total: u32) -> Self {
        Self { watched, total }
    }

    /// True only when every episode was played and the series has episodes.
    pub fn is_fully_watched(&self) -> bool {
        self.total > 0 && self.watched == self.total
    }

    /// A series nobody started is not watch data.
    pub fn is_started(&self) -> bool {
        self.watched > 0
    }
}

/// A series with at least one played episode for a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WatchedSeries {
    pub title: String,
    pub year: Option<u32>,
    pub tvdb_id: Option<String>,
    pub imdb_id: Option<String>,
    pub path: Option<String>,
    #[serde(default)]
    pub in_catalog: bool,
    pub catalog_id: Option<u64>,
    pub catalog_slug: Option<String>,
    pub source_id: Option<String>, // Jellyfin item id
    #[serde(default)]
    pub total_episodes: u32,
    #[serde(default)]
    pub watched_episodes: u32,
    #[serde(default)]
    pub is_fully_watched: bool,
    #[serde(default)]
    pub watched_by_users: Vec<String>,
}

impl WatchedSeries {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.title, self.year)
    }

    /// Copy episode counts in and derive the fully-watched flag from them
    pub fn set_progress(&mut self, progress: SeriesProgress) {
        self.watched_episodes = progress.watched;
        self.total_episodes = progress.total;
        self.is_fully_watched = progress.is_fully_watched();
    }

    pub fn progress(&self) -> SeriesProgress {
        SeriesProgress::new(self.watched_episodes, self.total_episodes)
    }
}
