//! Cache key and tag derivation.
//!
//! Keys must be deterministic across process restarts so that
//! concurrently-running instances agree on the key for identical
//! requests: the request signature is an order-stable JSON serialization
//! (object keys sorted) and the digest is SHA-256.

use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::request::RequestConfig;

/// Prefix for cached response payloads.
pub const CACHE_NAMESPACE: &str = "erine:cache:";

/// Prefix for tag index sets.
pub const TAG_NAMESPACE: &str = "erine:cache-tag:";

/// Set of all known tag names.
pub const TAG_REGISTRY_KEY: &str = "erine:cache-tag:__all";

/// Extra lifetime granted to a tag index beyond its longest-lived member,
/// so the index never expires before the entries it tracks.
pub const TAG_TTL_BUFFER_SECONDS: u64 = 5;

/// Derive a tag from a request URL: the first path segment with one
/// leading slash stripped, falling back to `"default"`.
pub fn tag_from_url(url: &str) -> String {
    let normalized = url.strip_prefix('/').unwrap_or(url);
    let first = normalized.split('/').next().unwrap_or("");
    if first.is_empty() {
        "default".to_string()
    } else {
        first.to_string()
    }
}

/// Stable serialization of the request shape, used as the cache key when
/// the caller supplies none. Never stored; only hashed.
pub fn request_signature(config: &RequestConfig) -> String {
    // serde_json maps are BTree-backed, so object keys come out sorted.
    let signature = serde_json::json!({
        "url": config.url,
        "method": config.method.as_str(),
        "query": config.query,
        "body": config.body,
    });
    signature.to_string()
}

/// Fully-qualified cache-store key for a cache key under a tag.
pub fn namespaced_key(tag: &str, cache_key: &str) -> String {
    format!("{CACHE_NAMESPACE}{tag}:{}", digest(cache_key))
}

/// Key of the set holding the members of a tag.
pub fn tag_key(tag: &str) -> String {
    format!("{TAG_NAMESPACE}{tag}")
}

/// Hex SHA-256 digest of a cache key.
pub fn digest(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// TTL for a tag index: `max(1, ceil(ttl_ms / 1000) + buffer)` seconds.
pub fn tag_index_ttl(entry_ttl: Duration) -> Duration {
    let entry_ms = entry_ttl.as_millis() as u64;
    let seconds = (entry_ms.div_ceil(1000) + TAG_TTL_BUFFER_SECONDS).max(1);
    Duration::from_secs(seconds)
}
