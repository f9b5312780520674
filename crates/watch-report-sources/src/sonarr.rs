use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::arr::ArrHttpClient;
use crate::error::SourceError;
use crate::http::HttpSettings;
use crate::items::CatalogItem;
use crate::traits::Catalog;

const SERVICE: &str = "Sonarr";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeries {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub year: Option<u32>,
    pub tvdb_id: Option<u64>,
    pub title_slug: Option<String>,
}

impl From<SonarrSeries> for CatalogItem {
    fn from(series: SonarrSeries) -> Self {
        CatalogItem {
            id: series.id,
            title: series.title,
            year: series.year.filter(|y| *y != 0),
            external_id: series.tvdb_id,
            title_slug: series.title_slug,
        }
    }
}

/// Series catalog, keyed on TVDB ids
pub struct SonarrClient {
    api: ArrHttpClient,
}

impl SonarrClient {
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
impl Catalog for SonarrClient {
    fn catalog_name(&self) -> &str {
        SERVICE
    }

    fn external_id_name(&self) -> &str {
        "tvdb"
    }

    async fn test_connection(&self) -> bool {
        self.api.check_status().await
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>, SourceError> {
        debug!("Fetching all series from Sonarr");
        let series: Vec<SonarrSeries> = self.api.get_json("series").await?;
        info!(count = series.len(), "Found series in Sonarr");
        Ok(series.into_iter().map(CatalogItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServer;

    #[test]
    fn test_parse_series() {
        let json = r#"[
            {"id": 7, "title": "Severance", "year": 2022, "tvdbId": 371980, "titleSlug": "severance", "seasons": []},
            {"id": 8, "title": "Orphan", "tvdbId": null}
        ]"#;
        let series: Vec<SonarrSeries> = serde_json::from_str(json).unwrap();
        let items: Vec<CatalogItem> = series.into_iter().map(CatalogItem::from).collect();

        assert_eq!(items[0].external_key(), Some("371980".to_string()));
        assert_eq!(items[0].title_slug.as_deref(), Some("severance"));
        assert_eq!(items[1].external_key(), None);
    }

    #[test]
    fn test_catalog_identity() {
        let client = SonarrClient::new("http://sonarr:8989/", "key", HttpSettings::default()).unwrap();
        assert_eq!(client.catalog_name(), "Sonarr");
        assert_eq!(client.external_id_name(), "tvdb");
        assert_eq!(client.base_url(), "http://sonarr:8989");
    }

    #[tokio::test]
    async fn test_list_all_request() {
        let server = StubServer::start(&[("GET /api/v3/series", r#"[{"id": 7, "title": "Severance", "year": 2022, "tvdbId": 371980, "titleSlug": "severance"}]"#)]).await;
        let client = SonarrClient::new(&format!("{}/", server.base_url), "secret-key", HttpSettings::default())
            .unwrap();

        let items = client.list_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].external_key(), Some("371980".to_string()));

        let request = server.request_to("/api/v3/series");
        assert_eq!(request.method, axum::http::Method::GET);
        assert_eq!(request.header("x-api-key"), Some("secret-key"));
    }

    #[tokio::test]
    async fn test_connection_reports_reachability() {
        let server = StubServer::start(&[(
            "GET /api/v3/system/status",
            r#"{"appName": "Sonarr", "version": "5.0.0"}"#,
        )])
        .await;
        let client = SonarrClient::new(&server.base_url, "secret-key", HttpSettings::default()).unwrap();
        assert!(client.test_connection().await);
        assert_eq!(
            server.request_to("/api/v3/system/status").header("x-api-key"),
            Some("secret-key")
        );

        let down = StubServer::start(&[]).await;
        let client = SonarrClient::new(&down.base_url, "secret-key", HttpSettings::default()).unwrap();
        assert!(!client.test_connection().await);
    }
}
