use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A media-server account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaUser {
    pub id: String,
    pub name: String,
}

/// A movie or series as listed by the media server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub production_year: Option<u32>,
    pub provider_ids: HashMap<String, String>,
    pub path: Option<String>,
    pub played: Option<bool>,
}

impl MediaItem {
    /// Provider id by name ("Tmdb", "Tvdb", "Imdb"), ignoring case and blank values
    pub fn provider_id(&self, provider: &str) -> Option<String> {
        self.provider_ids
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(provider))
            .map(|(_, id)| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    pub fn tmdb_id(&self) -> Option<String> {
        self.provider_id("Tmdb")
    }

    pub fn tvdb_id(&self) -> Option<String> {
        self.provider_id("Tvdb")
    }

    pub fn imdb_id(&self) -> Option<String> {
        self.provider_id("Imdb")
    }

    pub fn title(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

/// A movie (Radarr) or series (Sonarr) known to a catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub year: Option<u32>,
    /// TMDB id for Radarr, TVDB id for Sonarr
    pub external_id: Option<u64>,
    pub title_slug: Option<String>,
}

impl CatalogItem {
    /// Lookup key for the external id; zero means "not set" in the *arr APIs
    pub fn external_key(&self) -> Option<String> {
        self.external_id.filter(|id| *id != 0).map(|id| id.to_string())
    }
}
