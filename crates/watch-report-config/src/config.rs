use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::credentials::CredentialsConfig;
use crate::error::ConfigError;
use crate::paths::PathManager;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub url: String,
}

impl ServiceEndpoint {
    /// URL without trailing slashes, ready for path concatenation
    pub fn base_url(&self) -> String {
        self.url.trim().trim_end_matches('/').to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpOptions {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_true")]
    pub verify_tls: bool,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceUrlConfig {
    pub jellyfin: ServiceEndpoint,
    pub sonarr: ServiceEndpoint,
    pub radarr: ServiceEndpoint,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpOptions,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            verify_tls: default_true(),
        }
    }
}

/// Service URLs and credentials, loaded together at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub urls: ServiceUrlConfig,
    pub credentials: CredentialsConfig,
}

fn read_toml<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
    template: String,
) -> Result<T, ConfigError> {
    if !path.exists() {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        return Err(ConfigError::NotFound {
            kind,
            path: path.to_path_buf(),
            file_name,
            template,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Read {} file", kind.to_lowercase());

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl ServiceUrlConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        read_toml(path, "Config", PathManager::config_template_name())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, endpoint) in [
            ("jellyfin", &self.jellyfin),
            ("sonarr", &self.sonarr),
            ("radarr", &self.radarr),
        ] {
            let url = endpoint.url.trim();
            if url.is_empty() {
                return Err(ConfigError::Invalid(format!("{}.url must not be empty", name)));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "{}.url must start with http:// or https:// (got '{}')",
                    name, url
                )));
            }
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("http.timeout_seconds must be positive".to_string()));
        }
        Ok(())
    }
}

impl CredentialsConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        read_toml(path, "Credentials", PathManager::credentials_template_name())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "credentials not set: {}",
                missing.join(", ")
            )))
        }
    }
}

impl AppConfig {
    /// Load and validate both files; URLs first so a missing config.toml is reported first
    pub fn load(paths: &PathManager) -> Result<Self, ConfigError> {
        let urls = ServiceUrlConfig::load_from_file(&paths.config_file())?;
        let credentials = CredentialsConfig::load_from_file(&paths.credentials_file())?;

        urls.validate()?;
        credentials.validate()?;

        Ok(Self { urls, credentials })
    }
}
