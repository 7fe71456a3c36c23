//! Giphy integration configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the Giphy API key
pub const GIPHY_API_KEY_VAR: &str = "GIPHY_API_KEY";

/// Configuration for the Giphy search client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiphyConfig {
    /// Giphy API key; when absent, construction falls back to the
    /// `GIPHY_API_KEY` environment variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Giphy API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.giphy.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GiphyConfig {
    /// Create a configuration with the API key taken from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(GIPHY_API_KEY_VAR).ok(),
            ..Default::default()
        }
    }

    /// Create a configuration with an explicit API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }
}
