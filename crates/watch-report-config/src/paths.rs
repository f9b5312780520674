use std::path::{Path, PathBuf};

/// Environment variable overriding the directory the config files live in
pub const CONFIG_DIR_ENV: &str = "ARRCLEANER_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";
const CREDENTIALS_FILE: &str = "credentials.toml";
const TEMPLATE_SUFFIX: &str = ".example";

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Explicit directory first, then the environment, then the working directory
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join(CREDENTIALS_FILE)
    }

    pub fn config_template_name() -> String {
        format!("{}{}", CONFIG_FILE, TEMPLATE_SUFFIX)
    }

    pub fn credentials_template_name() -> String {
        format!("{}{}", CREDENTIALS_FILE, TEMPLATE_SUFFIX)
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new(".")
    }
}
