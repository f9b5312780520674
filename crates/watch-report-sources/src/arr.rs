use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::SourceError;
use crate::http::{send_json, trim_base_url, HttpSettings};

/// Response of `/api/v3/system/status`, shared by Radarr and Sonarr
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Thin v3 API client with the `X-Api-Key` header baked in
pub struct ArrHttpClient {
    service: &'static str,
    client: Client,
    base_url: String,
}

impl ArrHttpClient {
    pub fn new(
        service: &'static str,
        base_url: &str,
        api_key: &str,
        settings: HttpSettings,
    ) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        let mut key = HeaderValue::from_str(api_key.trim()).map_err(|e| SourceError::Config {
            service,
            message: format!("invalid API key: {}", e),
        })?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), key);

        Ok(Self {
            service,
            client: settings.build_client(service, headers)?,
            base_url: trim_base_url(base_url),
        })
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}/api/v3/{}", self.base_url, path.trim_start_matches('/'));
        send_json(self.service, self.client.get(url)).await
    }

    pub async fn system_status(&self) -> Result<SystemStatus, SourceError> {
        self.get_json("system/status").await
    }

    /// Status check used by both catalogs' `test_connection`
    pub async fn check_status(&self) -> bool {
        info!("Testing connection to {}", self.service);
        match self.system_status().await {
            Ok(status) => {
                info!(
                    version = status.version.as_deref().unwrap_or("unknown"),
                    "Successfully connected to {}", self.service
                );
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to connect to {}", self.service);
                false
            }
        }
    }
}
