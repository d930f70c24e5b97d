//! API client (cache gateway) configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the typed HTTP client consumed by page components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hard per-request timeout in seconds. Not retried.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Default TTL for cached responses in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub default_ttl_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            default_ttl_ms: default_ttl_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_timeout() -> u64 {
    12
}

fn default_ttl_ms() -> u64 {
    30_000
}
