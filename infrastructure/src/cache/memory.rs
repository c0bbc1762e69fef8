//! In-process TTL cache implementing the [`CachePort`].
//!
//! Values live in a [`DashMap`] keyed by string. Expiry is checked lazily on
//! read; [`InMemoryCache::purge_expired`] drops stale entries in bulk.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use triage_application::{CacheError, CachePort};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Concurrent key/value cache with per-entry time-to-live
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove one key. Returns whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every key starting with `prefix`. Returns the number removed.
    pub fn clear_prefix(&self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());
        debug!("Cleared {} cache entries with prefix {:?}", removed, prefix);
        removed
    }

    /// Drop entries whose TTL has elapsed. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CachePort for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let now = Instant::now();
        let Some(entry) = self.entries.get(key) else {
            return Ok(None);
        };
        if entry.expires_at > now {
            return Ok(Some(entry.value.clone()));
        }
        // Release the read guard before removing
        drop(entry);
        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> bool {
        let Some(expires_at) = Instant::now().checked_add(ttl) else {
            return false;
        };
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        true
    }
}
