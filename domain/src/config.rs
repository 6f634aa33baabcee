//! Runtime configuration for the admin app.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields a working setup against a local backend.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "mecarvi_admin_session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub session_storage_key: String,
}

impl AdminConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AdminConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.session_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation
    pub fn api_root(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
        }
    }
}
