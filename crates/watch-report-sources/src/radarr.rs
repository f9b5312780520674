use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::arr::ArrHttpClient;
use crate::error::SourceError;
use crate::http::HttpSettings;
use crate::items::CatalogItem;
use crate::traits::Catalog;

const SERVICE: &str = "Radarr";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub year: Option<u32>,
    pub tmdb_id: Option<u64>,
    pub title_slug: Option<String>,
}

impl From<RadarrMovie> for CatalogItem {
    fn from(movie: RadarrMovie) -> Self {
        CatalogItem {
            id: movie.id,
            title: movie.title,
            year: movie.year.filter(|y| *y != 0),
            external_id: movie.tmdb_id,
            title_slug: movie.title_slug,
        }
    }
}

/// Movie catalog, keyed on TMDB ids
pub struct RadarrClient {
    api: ArrHttpClient,
}

impl RadarrClient {
    pub fn new(base_url: &str, api_key: &str, settings: HttpSettings) -> Result<Self, SourceError> {
        Ok(Self {
            api: ArrHttpClient::new(SERVICE, base_url, api_key, settings)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }
}

#[async_trait]
impl Catalog for RadarrClient {
    fn catalog_name(&self) -> &str {
        SERVICE
    }

    fn external_id_name(&self) -> &str {
        "tmdb"
    }

    async fn test_connection(&self) -> bool {
        self.api.check_status().await
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>, SourceError> {
        debug!("Fetching all movies from Radarr");
        let movies: Vec<RadarrMovie> = self.api.get_json("movie").await?;
        info!(count = movies.len(), "Found movies in Radarr");
        Ok(movies.into_iter().map(CatalogItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServer;

    #[test]
    fn test_parse_movies() {
        let json = r#"[
            {"id": 12, "title": "Dune", "year": 2021, "tmdbId": 438631, "titleSlug": "dune-438631", "monitored": true},
            {"id": 13, "title": "Unknown Thing", "year": 0, "tmdbId": 0}
        ]"#;
        let movies: Vec<RadarrMovie> = serde_json::from_str(json).unwrap();
        let items: Vec<CatalogItem> = movies.into_iter().map(CatalogItem::from).collect();

        assert_eq!(items[0].id, 12);
        assert_eq!(items[0].external_key(), Some("438631".to_string()));
        assert_eq!(items[0].title_slug.as_deref(), Some("dune-438631"));
        assert_eq!(items[1].year, None);
        assert_eq!(items[1].external_key(), None);
    }

    #[test]
    fn test_catalog_identity() {
        let client = RadarrClient::new("http://radarr:7878", "key", HttpSettings::default()).unwrap();
        assert_eq!(client.catalog_name(), "Radarr");
        assert_eq!(client.external_id_name(), "tmdb");
    }

    #[tokio::test]
    async fn test_list_all_request() {
        let server = StubServer::start(&[("GET /api/v3/movie", r#"[{"id": 12, "title": "Dune", "year": 2021, "tmdbId": 438631, "titleSlug": "dune-438631"}]"#)]).await;
        let client = RadarrClient::new(&format!("{}/", server.base_url), "secret-key", HttpSettings::default())
            .unwrap();

        let items = client.list_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].external_key(), Some("438631".to_string()));

        let request = server.request_to("/api/v3/movie");
        assert_eq!(request.method, axum::http::Method::GET);
        assert_eq!(request.header("x-api-key"), Some("secret-key"));
    }

    #[tokio::test]
    async fn test_connection_reports_reachability() {
        let server = StubServer::start(&[(
            "GET /api/v3/system/status",
            r#"{"appName": "Radarr", "version": "5.0.0"}"#,
        )])
        .await;
        let client = RadarrClient::new(&server.base_url, "secret-key", HttpSettings::default()).unwrap();
        assert!(client.test_connection().await);
        assert_eq!(
            server.request_to("/api/v3/system/status").header("x-api-key"),
            Some("secret-key")
        );

        let down = StubServer::start(&[]).await;
        let client = RadarrClient::new(&down.base_url, "secret-key", HttpSettings::default()).unwrap();
        assert!(!client.test_connection().await);
    }
}
