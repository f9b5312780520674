use serde::{Deserialize, Serialize};
use std::fmt;

const PLACEHOLDERS: [&str; 3] = ["YOUR_API_KEY", "YOUR_PASSWORD", "YOUR_USERNAME"];

#[derive(Clone, Serialize, Deserialize)]
pub struct JellyfinCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    pub api_key: String,
}

/// Contents of `credentials.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub jellyfin: JellyfinCredentials,
    pub sonarr: ApiKeyCredentials,
    pub radarr: ApiKeyCredentials,
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        "<empty>".to_string()
    } else {
        "********".to_string()
    }
}

pub(crate) fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

impl fmt::Debug for JellyfinCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JellyfinCredentials")
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .finish()
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &mask(&self.api_key))
            .finish()
    }
}

impl CredentialsConfig {
    /// Names of credentials that are still empty or template placeholders
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_placeholder(&self.jellyfin.username) {
            missing.push("jellyfin.username");
        }
        if is_placeholder(&self.jellyfin.password) {
            missing.push("jellyfin.password");
        }
        if is_placeholder(&self.radarr.api_key) {
            missing.push("radarr.api_key");
        }
        if is_placeholder(&self.sonarr.api_key) {
            missing.push("sonarr.api_key");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(api_key: &str) -> CredentialsConfig {
        CredentialsConfig {
            jellyfin: JellyfinCredentials {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            },
            sonarr: ApiKeyCredentials { api_key: api_key.to_string() },
            radarr: ApiKeyCredentials { api_key: "abc123".to_string() },
        }
    }

    #[test]
    fn test_debug_masks_secrets() {
        let debug = format!("{:?}", credentials("sonarr-secret"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("sonarr-secret"));
        assert!(debug.contains("admin"));
    }

    #[test]
    fn test_missing_reports_placeholders() {
        assert!(credentials("real").missing().is_empty());
        assert_eq!(credentials("YOUR_API_KEY").missing(), vec!["sonarr.api_key"]);
        assert_eq!(credentials("  ").missing(), vec!["sonarr.api_key"]);
    }
}
