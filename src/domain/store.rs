//! Backing store contract

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Error raised by a backing store implementation
///
/// Repositories catch this at the operation boundary; it never reaches
/// their callers.
#[derive(Debug, Error)]
#[error("Store error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Cleaning mode for bulk invalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Removes entries carrying at least one of the given tags (logical OR)
    ///
    /// Stores must not narrow this to all-tags matching; group invalidation
    /// depends on any-tag semantics.
    MatchAnyTag,
    /// Removes every entry, ignoring tags
    All,
}

/// Tag-aware key-value store the repository delegates to
///
/// Implementations own entry lifecycle (eviction, expiry, persistence) and
/// must be safe for concurrent access from multiple callers.
#[async_trait]
pub trait CacheStore: Send + Sync + Debug {
    /// Stores a value under the given key with its tags and TTL
    ///
    /// Overwrites any existing entry under the same key.
    async fn save(
        &self,
        value: &str,
        key: &str,
        tags: &[String],
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Loads the value stored under the key, or `None` on a miss
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Removes the entry under the key; a no-op when the key is absent
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Removes entries in bulk according to the cleaning mode
    ///
    /// `tags` is ignored for [`CleanMode::All`].
    async fn clean(&self, mode: CleanMode, tags: &[String]) -> Result<(), StoreError>;
}

/// Registry of named store instances
///
/// Resolution must be cheap and side-effect-free to repeat; the repository
/// caches the first usable handle it obtains.
pub trait StorePool: Send + Sync + Debug {
    /// Returns the store registered for the namespace, if any
    fn get(&self, namespace: &str) -> Option<Arc<dyn CacheStore>>;
}
