//! The tagged cache gateway.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use erine_core::error::{AppError, ErrorKind};
use erine_core::result::AppResult;
use erine_core::traits::cache::CacheStore;
use erine_core::config::client::ClientConfig;
use erine_entity::{CreateMessage, GalleryImage, Message, Profile, ScheduleEntry};

use crate::keys;
use crate::models::{EventRecord, HealthStatus, MessageReceipt};
use crate::request::{RequestConfig, RequestOptions, TagPattern};
use crate::schedule;

/// Fallback error message when neither the response body nor the transport
/// error yields anything usable.
const GENERIC_ERROR: &str = "Unexpected API error";

/// Typed HTTP client for the Erine REST API with tag-based caching.
///
/// On each read the client derives a cache key and a tag from the request
/// shape, checks the remote store, serves hits directly, and on a miss
/// performs the network call, stores the payload with a TTL, and registers
/// the key under its tag for later bulk invalidation.
#[derive(Debug, Clone)]
pub struct ErineClient {
    /// Underlying HTTP client (hard 12 s per-request timeout, not retried).
    http: reqwest::Client,
    /// Base URL of the REST API, without a trailing slash.
    base_url: String,
    /// Remote cache store shared by all server instances.
    cache: Arc<dyn CacheStore>,
    /// Default TTL for cached responses.
    default_ttl: Duration,
}

impl ErineClient {
    /// Create a new client from configuration and an injected cache store.
    pub fn new(config: &ClientConfig, cache: Arc<dyn CacheStore>) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
            default_ttl: Duration::from_millis(config.default_ttl_ms),
        })
    }

    /// Return a client targeting a different base URL but sharing this
    /// client's cache store and defaults.
    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.base_url = base_url.into().trim_end_matches('/').to_string();
        client
    }

    // ── Core request path ──────────────────────────────────────

    /// Perform a request through the cache.
    ///
    /// With `skip_cache` the network call happens unconditionally and the
    /// store is never touched. Otherwise a hit is returned as-is and a miss
    /// is fetched, stored under its namespaced key, and indexed under its
    /// tag. All failures surface as a single error carrying a message.
    pub async fn request<T: DeserializeOwned>(
        &self,
        config: RequestConfig,
        options: RequestOptions,
    ) -> AppResult<T> {
        if options.skip_cache {
            let payload = self.fetch(&config, options.cancel.as_ref()).await?;
            return Ok(serde_json::from_value(payload)?);
        }

        let tag = options
            .cache_tag
            .clone()
            .unwrap_or_else(|| keys::tag_from_url(&config.url));
        let cache_key = options
            .cache_key
            .clone()
            .unwrap_or_else(|| keys::request_signature(&config));
        let namespaced_key = keys::namespaced_key(&tag, &cache_key);

        if let Some(cached) = self.cache.get(&namespaced_key).await? {
            debug!(key = %namespaced_key, tag = %tag, "cache hit");
            return Ok(serde_json::from_str(&cached)?);
        }

        let payload = self.fetch(&config, options.cancel.as_ref()).await?;

        let ttl = options.revalidate.unwrap_or(self.default_ttl);
        self.cache
            .set(&namespaced_key, &payload.to_string(), ttl)
            .await?;
        self.track_key(&tag, &namespaced_key, ttl).await?;
        debug!(key = %namespaced_key, tag = %tag, ttl_ms = ttl.as_millis() as u64, "cached response");

        Ok(serde_json::from_value(payload)?)
    }

    /// Issue the network call and normalize failures to a single message.
    async fn fetch(
        &self,
        config: &RequestConfig,
        cancel: Option<&CancellationToken>,
    ) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, config.url);
        let mut builder = self.http.request(config.method.clone(), &url);
        if let Some(query) = &config.query {
            builder = builder.query(query);
        }
        if let Some(body) = &config.body {
            builder = builder.json(body);
        }

        let send = builder.send();
        let result = match cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    return Err(AppError::external_service("Request cancelled"));
                }
                result = send => result,
            },
            None => send.await,
        };

        let response = result.map_err(|e| {
            let message = transport_message(&e);
            AppError::with_source(ErrorKind::ExternalService, message, e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, transport_message(&e), e)
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(upstream_message(status, &bytes)));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Register a namespaced key under its tag and the tag in the registry.
    async fn track_key(&self, tag: &str, namespaced_key: &str, ttl: Duration) -> AppResult<()> {
        let tag_key = keys::tag_key(tag);
        self.cache.sadd(&tag_key, namespaced_key).await?;
        self.cache.expire(&tag_key, keys::tag_index_ttl(ttl)).await?;
        self.cache.sadd(keys::TAG_REGISTRY_KEY, tag).await?;
        Ok(())
    }

    // ── Invalidation ───────────────────────────────────────────

    /// Invalidate cached entries.
    ///
    /// Without a pattern, every known tag is flushed. An exact pattern
    /// clears one tag; a regex clears every registered tag whose name
    /// matches. Clearing a tag removes its member entries, the tag index
    /// itself, and the tag's membership in the registry.
    pub async fn invalidate(&self, pattern: Option<TagPattern>) -> AppResult<()> {
        match pattern {
            None => {
                let tags = self.all_tags().await?;
                future::try_join_all(tags.iter().map(|tag| self.clear_tag(tag))).await?;
            }
            Some(TagPattern::Exact(tag)) => {
                self.clear_tag(&tag).await?;
            }
            Some(TagPattern::Matching(pattern)) => {
                let tags = self.all_tags().await?;
                future::try_join_all(
                    tags.iter()
                        .filter(|tag| pattern.is_match(tag))
                        .map(|tag| self.clear_tag(tag)),
                )
                .await?;
            }
        }
        Ok(())
    }

    /// Force-expire one tag so the next read refetches from the origin.
    pub async fn revalidate(&self, tag: &str) -> AppResult<()> {
        self.clear_tag(tag).await
    }

    async fn clear_tag(&self, tag: &str) -> AppResult<()> {
        let tag_key = keys::tag_key(tag);
        let members = self.cache.smembers(&tag_key).await?;
        if !members.is_empty() {
            self.cache.delete_many(&members).await?;
        }
        self.cache.delete(&tag_key).await?;
        self.cache.srem(keys::TAG_REGISTRY_KEY, tag).await?;
        debug!(tag = %tag, members = members.len(), "cleared cache tag");
        Ok(())
    }

    async fn all_tags(&self) -> AppResult<Vec<String>> {
        self.cache.smembers(keys::TAG_REGISTRY_KEY).await
    }

    // ── Resource wrappers ──────────────────────────────────────

    /// Warm up the most commonly read resources concurrently.
    ///
    /// Best-effort: each sub-request is isolated, so one failing neither
    /// cancels nor fails the others.
    pub async fn prefetch(&self, cancel: Option<CancellationToken>) {
        let options = |cancel: Option<CancellationToken>| RequestOptions {
            cancel,
            ..RequestOptions::default()
        };

        let (profile, schedule, messages) = tokio::join!(
            self.get_profile(options(cancel.clone())),
            self.get_schedule(options(cancel.clone()), None),
            self.get_messages(options(cancel)),
        );

        if let Err(e) = profile {
            warn!(error = %e, "prefetch: profile fetch failed");
        }
        if let Err(e) = schedule {
            warn!(error = %e, "prefetch: schedule fetch failed");
        }
        if let Err(e) = messages {
            warn!(error = %e, "prefetch: messages fetch failed");
        }
    }

    /// Check API liveness, bypassing the cache.
    pub async fn health_check(&self, cancel: Option<CancellationToken>) -> AppResult<HealthStatus> {
        let options = RequestOptions {
            cancel,
            ..RequestOptions::bypass()
        };
        self.request(RequestConfig::get("/health"), options).await
    }

    /// Fetch the celebrity profile.
    pub async fn get_profile(&self, options: RequestOptions) -> AppResult<Profile> {
        self.request(
            RequestConfig::get("/profiles"),
            options.or_defaults("profiles:single", "profiles"),
        )
        .await
    }

    /// Fetch the gallery.
    pub async fn get_gallery(&self, options: RequestOptions) -> AppResult<Vec<GalleryImage>> {
        self.request(
            RequestConfig::get("/gallery"),
            options.or_defaults("gallery:all", "gallery"),
        )
        .await
    }

    /// Fetch events and map them into display-ready schedule entries,
    /// optionally truncated to `limit`.
    pub async fn get_schedule(
        &self,
        options: RequestOptions,
        limit: Option<usize>,
    ) -> AppResult<Vec<ScheduleEntry>> {
        let events: Vec<EventRecord> = self
            .request(
                RequestConfig::get("/events"),
                options.or_defaults("events:list", "events"),
            )
            .await?;

        let mut entries: Vec<ScheduleEntry> = events.into_iter().map(schedule::to_entry).collect();
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    /// Fetch guestbook messages.
    pub async fn get_messages(&self, options: RequestOptions) -> AppResult<Vec<Message>> {
        self.request(
            RequestConfig::get("/messages"),
            options.or_defaults("messages:list", "messages"),
        )
        .await
    }

    /// Post a guestbook message, then revalidate the `"messages"` tag so
    /// the next read observes it.
    pub async fn send_message(&self, payload: &CreateMessage) -> AppResult<MessageReceipt> {
        let receipt: MessageReceipt = self
            .request(
                RequestConfig::post("/messages", serde_json::to_value(payload)?),
                RequestOptions::bypass(),
            )
            .await?;

        self.revalidate("messages").await?;
        Ok(receipt)
    }
}

/// Message for a transport-level failure.
fn transport_message(error: &reqwest::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        message
    }
}

/// Message for a non-2xx upstream response: the body's `message` field,
/// else the status reason, else a generic fallback.
fn upstream_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    status
        .canonical_reason()
        .map(|reason| format!("{} {reason}", status.as_u16()))
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefers_body_field() {
        let body = br#"{"message":"Profile already exists"}"#;
        assert_eq!(
            upstream_message(StatusCode::CONFLICT, body),
            "Profile already exists"
        );
    }

    #[test]
    fn test_upstream_message_falls_back_to_status() {
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, b"not json"),
            "502 Bad Gateway"
        );
    }
}
