use serde::{Deserialize, Serialize};
use crate::item_key::ItemKey;

/// A movie marked played by at least one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WatchedMovie {
    pub title: String,
    pub year: Option<u32>,
    pub tmdb_id: Option<String>,
    pub imdb_id: Option<String>,
    pub path: Option<String>,
    #[serde(default)]
    pub in_catalog: bool,
    pub catalog_id: Option<u64>,
    pub source_id: Option<String>, // Jellyfin item id
    #[serde(default)]
    pub watched_by_users: Vec<String>,
}

impl WatchedMovie {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.title, self.year)
    }
}
