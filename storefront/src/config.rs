//! # Client Configuration
//!
//! Base address of the catalog API, loaded from the environment once at
//! startup and injected into [`crate::services::api::ApiClient`]. The base
//! address is a fixed configuration value, never module-level mutable state.

use std::env;

/// Default API base address for local development
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

/// Client configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the catalog API, e.g. `http://192.168.1.102:3000/api`
    pub base_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `STOREFRONT_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let config = Self { base_url };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("STOREFRONT_API_URL must start with http:// or https://".to_string());
        }

        if self.base_url.ends_with('/') {
            return Err("STOREFRONT_API_URL must not end with a trailing slash".to_string());
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
