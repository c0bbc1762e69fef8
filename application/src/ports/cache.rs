//! Cache port
//!
//! A key/value store with per-entry expiry. The pipeline treats it as an
//! optimization only: read errors count as misses and failed writes are
//! ignored.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    #[error("Cache value could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CachePort: Send + Sync {
    /// Fetch a live value, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Store `value` for `ttl`. Returns whether the write succeeded.
    async fn set(&self, key: &str, value: Value, ttl: Duration) -> bool;
}

/// Cache that never stores anything.
pub struct NoCache;

#[async_trait]
impl CachePort for NoCache {
    async fn get(&self, _key: &str) -> Result<Option<Value>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Duration) -> bool {
        false
    }
}
