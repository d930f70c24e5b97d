//! Request descriptions and per-call options.

use std::collections::BTreeMap;
use std::time::Duration;

use regex::Regex;
use reqwest::Method;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// The shape of an outgoing request. The cache key is derived from this,
/// so query parameters use a sorted map.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Path relative to the client base URL, with a leading slash.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Query parameters (order-stable).
    pub query: Option<BTreeMap<String, String>>,
    /// JSON request body.
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Describe a request with an arbitrary method.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            query: None,
            body: None,
        }
    }

    /// Describe a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Describe a POST request with a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        let mut config = Self::new(Method::POST, url);
        config.body = Some(body);
        config
    }

    /// Attach query parameters.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.query = Some(map);
        self
    }
}

/// Per-call caching options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Explicit cache key; derived from the request shape when absent.
    pub cache_key: Option<String>,
    /// Explicit tag; derived from the URL when absent.
    pub cache_tag: Option<String>,
    /// TTL override for the cached response.
    pub revalidate: Option<Duration>,
    /// Cooperative cancellation, threaded to the network call only.
    pub cancel: Option<CancellationToken>,
    /// Bypass the cache entirely (writes, health checks).
    pub skip_cache: bool,
}

impl RequestOptions {
    /// Options that bypass the cache entirely.
    pub fn bypass() -> Self {
        Self {
            skip_cache: true,
            ..Self::default()
        }
    }

    /// Set the TTL override.
    pub fn with_revalidate(mut self, ttl: Duration) -> Self {
        self.revalidate = Some(ttl);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Fill in the well-known key and tag unless the caller overrode them.
    pub(crate) fn or_defaults(mut self, cache_key: &str, cache_tag: &str) -> Self {
        self.cache_key.get_or_insert_with(|| cache_key.to_string());
        self.cache_tag.get_or_insert_with(|| cache_tag.to_string());
        self
    }
}

/// Which tags an invalidation call targets.
#[derive(Debug, Clone)]
pub enum TagPattern {
    /// Exactly one tag.
    Exact(String),
    /// Every registered tag whose name matches.
    Matching(Regex),
}

impl From<&str> for TagPattern {
    fn from(tag: &str) -> Self {
        Self::Exact(tag.to_string())
    }
}

impl From<String> for TagPattern {
    fn from(tag: String) -> Self {
        Self::Exact(tag)
    }
}

impl From<Regex> for TagPattern {
    fn from(pattern: Regex) -> Self {
        Self::Matching(pattern)
    }
}
