use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::trace;

use crate::error::SourceError;

const MAX_ERROR_BODY: usize = 200;

/// Transport options shared by all three clients
#[derive(Debug, Clone, Copy)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub verify_tls: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            verify_tls: true,
        }
    }
}

impl HttpSettings {
    pub fn new(timeout_seconds: u64, verify_tls: bool) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_seconds),
            verify_tls,
        }
    }

    pub(crate) fn build_client(
        &self,
        service: &'static str,
        headers: HeaderMap,
    ) -> Result<Client, SourceError> {
        Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .map_err(|source| SourceError::Http { service, source })
    }
}

pub(crate) fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Send a request and decode a JSON body, turning non-2xx into `SourceError::Status`
pub(crate) async fn send_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, SourceError> {
    let response = request
        .send()
        .await
        .map_err(|source| SourceError::Http { service, source })?;

    let status = response.status();
    let url = response.url().to_string();
    trace!("{}: {} {}", service, status, url);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Status {
            service,
            status,
            url,
            body: truncate(&body, MAX_ERROR_BODY),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| SourceError::Http { service, source })?;

    serde_json::from_slice(&bytes).map_err(|e| SourceError::Decode {
        service,
        message: format!("{} ({})", e, url),
    })
}

fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url(" http://host:8096/ "), "http://host:8096");
        assert_eq!(trim_base_url("http://host//"), "http://host");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
    }

    #[test]
    fn test_default_settings() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(settings.verify_tls);
        assert!(settings.build_client("Test", HeaderMap::new()).is_ok());
    }
}
