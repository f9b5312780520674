use serde::{Deserialize, Serialize};
use crate::movie::WatchedMovie;
use crate::series::WatchedSeries;

/// Everything one media-server user has watched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserWatchRecord {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub watched_movies: Vec<WatchedMovie>,
    #[serde(default)]
    pub watched_series: Vec<WatchedSeries>,
}

impl UserWatchRecord {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            watched_movies: Vec::new(),
            watched_series: Vec::new(),
        }
    }
}
