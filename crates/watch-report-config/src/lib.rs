pub mod config;
pub mod credentials;
pub mod error;
pub mod paths;

pub use config::{AppConfig, HttpOptions, ServerConfig, ServiceEndpoint, ServiceUrlConfig};
pub use credentials::{ApiKeyCredentials, CredentialsConfig, JellyfinCredentials};
pub use error::ConfigError;
pub use paths::{PathManager, CONFIG_DIR_ENV};
