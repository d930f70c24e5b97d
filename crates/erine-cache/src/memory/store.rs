//! In-memory cache store using moka for values and dashmap for sets.
//!
//! Values get real per-entry TTLs through a moka expiry policy. Set keys
//! (tag indexes, tag registry) live in a dashmap with explicit expiry
//! stamps checked on access, because moka values are immutable.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use moka::Expiry;
use moka::future::Cache;

use erine_core::config::cache::MemoryCacheConfig;
use erine_core::result::AppResult;
use erine_core::traits::cache::CacheStore;

/// A cached string value together with its TTL.
#[derive(Debug, Clone)]
struct ValueEntry {
    value: String,
    ttl: Duration,
}

/// Expiry policy that reads the TTL stored inside each entry.
struct PerEntryExpiry;

impl Expiry<String, ValueEntry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &ValueEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &ValueEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// A set of members with an optional expiry stamp.
#[derive(Debug, Default)]
struct SetEntry {
    members: HashSet<String>,
    expires_at: Option<Instant>,
}

impl SetEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// In-memory cache store. Also serves as the fake store in tests.
#[derive(Debug, Clone)]
pub struct MemoryCacheStore {
    /// String values with per-entry TTL.
    values: Cache<String, ValueEntry>,
    /// Set keys (tag indexes and the tag registry).
    sets: std::sync::Arc<DashMap<String, SetEntry>>,
}

impl MemoryCacheStore {
    /// Create a new in-memory cache store from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let values = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self {
            values,
            sets: std::sync::Arc::new(DashMap::new()),
        }
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(&MemoryCacheConfig::default())
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = ValueEntry {
            value: value.to_string(),
            ttl,
        };
        self.values.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.values.remove(key).await;
        self.sets.remove(key);
        Ok(())
    }

    async fn delete_many(&self, keys: &[String]) -> AppResult<()> {
        for key in keys {
            self.delete(key).await?;
        }
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        if let Some(mut entry) = self.sets.get_mut(key) {
            if entry.is_expired() {
                drop(entry);
                self.sets.remove(key);
                return Ok(false);
            }
            entry.expires_at = Some(Instant::now() + ttl);
            return Ok(true);
        }

        // moka cannot change the TTL of a live entry, so re-insert.
        if let Some(entry) = self.values.get(key).await {
            self.values
                .insert(
                    key.to_string(),
                    ValueEntry {
                        value: entry.value,
                        ttl,
                    },
                )
                .await;
            return Ok(true);
        }

        Ok(false)
    }

    async fn sadd(&self, key: &str, member: &str) -> AppResult<()> {
        let mut entry = self.sets.entry(key.to_string()).or_default();
        if entry.is_expired() {
            entry.members.clear();
            entry.expires_at = None;
        }
        entry.members.insert(member.to_string());
        Ok(())
    }

    async fn srem(&self, key: &str, member: &str) -> AppResult<()> {
        if let Some(mut entry) = self.sets.get_mut(key) {
            entry.members.remove(member);
        }
        Ok(())
    }

    async fn smembers(&self, key: &str) -> AppResult<Vec<String>> {
        let expired = match self.sets.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => return Ok(entry.members.iter().cloned().collect()),
            None => return Ok(Vec::new()),
        };
        if expired {
            self.sets.remove(key);
        }
        Ok(Vec::new())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
