use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_API_URL, DEFAULT_DIRECTORY_PAGE_SIZE,
    DEFAULT_DIRECTORY_TIMEOUT_SECS, MAX_DIRECTORY_PAGE_SIZE, MAX_DIRECTORY_TIMEOUT_SECS,
    MIN_DIRECTORY_PAGE_SIZE, MIN_DIRECTORY_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Identity provider backend API used to look up organization memberships
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub api_url: String,
    pub secret_key: String,
    pub timeout_secs: u64,
    pub page_size: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_DIRECTORY_API_URL),
            secret_key: String::new(),
            timeout_secs: DEFAULT_DIRECTORY_TIMEOUT_SECS,
            page_size: DEFAULT_DIRECTORY_PAGE_SIZE,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::directory(format!(
                "directory.api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.secret_key.trim().is_empty() {
            return Err(ConfigError::directory("directory.secret_key is required"));
        }

        if !(MIN_DIRECTORY_TIMEOUT_SECS..=MAX_DIRECTORY_TIMEOUT_SECS).contains(&self.timeout_secs)
        {
            return Err(ConfigError::directory(format!(
                "directory.timeout_secs must be {}-{}, got {}",
                MIN_DIRECTORY_TIMEOUT_SECS, MAX_DIRECTORY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !(MIN_DIRECTORY_PAGE_SIZE..=MAX_DIRECTORY_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::directory(format!(
                "directory.page_size must be {}-{}, got {}",
                MIN_DIRECTORY_PAGE_SIZE, MAX_DIRECTORY_PAGE_SIZE, self.page_size
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
