//! In-memory backing store using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::store::{CacheStore, CleanMode, StoreError};

/// Configuration for the in-memory store
#[derive(Debug, Clone)]
pub struct InMemoryStoreConfig {
    /// Maximum number of entries
    pub max_capacity: u64,
    /// Time to idle - entries not accessed for this duration are evicted
    pub time_to_idle: Option<Duration>,
}

impl Default for InMemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_idle: None,
        }
    }
}

impl InMemoryStoreConfig {
    /// Sets the maximum capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the time-to-idle duration
    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }
}

/// Entry stored in moka
#[derive(Debug, Clone)]
struct StoredEntry {
    data: String,
    tags: Vec<String>,
    /// Expiration timestamp (millis since epoch)
    expires_at: u64,
}

/// Thread-safe tag-aware in-memory store
///
/// TTL is tracked per entry and checked on read, since every save carries
/// its own lifetime; capacity-based eviction is delegated to moka.
#[derive(Debug)]
pub struct InMemoryStore {
    cache: MokaCache<String, StoredEntry>,
}

impl InMemoryStore {
    /// Creates a store with the default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryStoreConfig::default())
    }

    /// Creates a store with the given configuration
    pub fn with_config(config: InMemoryStoreConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);

        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            cache: builder.build(),
        }
    }

    fn current_time_millis() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn is_expired(entry: &StoredEntry) -> bool {
        Self::current_time_millis() > entry.expires_at
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryStore {
    async fn save(
        &self,
        value: &str,
        key: &str,
        tags: &[String],
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let entry = StoredEntry {
            data: value.to_string(),
            tags: tags.to_vec(),
            expires_at: Self::current_time_millis() + ttl.as_millis() as u64,
        };

        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.cache.get(key).await {
            Some(entry) => {
                if Self::is_expired(&entry) {
                    self.cache.remove(key).await;
                    return Ok(None);
                }

                Ok(Some(entry.data.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn clean(&self, mode: CleanMode, tags: &[String]) -> Result<(), StoreError> {
        match mode {
            CleanMode::All => {
                self.cache.invalidate_all();
                self.cache.run_pending_tasks().await;
                Ok(())
            }
            CleanMode::MatchAnyTag => {
                // Sync pending tasks first
                self.cache.run_pending_tasks().await;

                let wanted = tags.to_vec();
                let cache_clone = self.cache.clone();

                // Use blocking task to iterate over cache entries
                let keys_to_remove: Vec<String> = tokio::task::spawn_blocking(move || {
                    cache_clone
                        .iter()
                        .filter_map(|(k, entry)| {
                            if entry.tags.iter().any(|t| wanted.contains(t)) {
                                let key_str: &str = k.as_ref();
                                Some(key_str.to_string())
                            } else {
                                None
                            }
                        })
                        .collect()
                })
                .await
                .map_err(|e| StoreError::new(format!("failed to iterate store entries: {e}")))?;

                for key in keys_to_remove {
                    self.cache.remove(&key).await;
                }

                Ok(())
            }
        }
    }
}
