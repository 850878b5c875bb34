//! Cache repository trait and the default facade implementation

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::error::CacheError;
use super::key::KeyHasher;
use super::logger::ErrorLogger;
use super::store::{CacheStore, CleanMode, StoreError, StorePool};

/// Namespace under which the backing store is registered in the pool
const STORE_NAMESPACE: &str = "tagcache";
/// Prefix for derived cache keys; distinct from the reserved tag literal so
/// key and tag namespaces cannot collide in stores sharing a table
const KEY_PREFIX: &str = "tagcache_";
/// Tag implicitly attached to every entry owned by the repository
const RESERVED_TAG: &str = "tagcache";
/// TTL applied when the caller does not supply one
const DEFAULT_TTL: Duration = Duration::from_secs(3600); // 1 hour

/// Tag-addressable cache repository
///
/// Stores opaque string payloads under hashed keys with tag-based group
/// invalidation. Every operation raises exactly one [`CacheError`] kind;
/// callers must treat any error as "operation did not happen", with no
/// partial-effect guarantees beyond what the backing store provides.
#[async_trait]
pub trait CacheRepository: Send + Sync + Debug {
    /// Saves data under the key with optional tags and TTL
    ///
    /// The TTL defaults to one hour when omitted.
    async fn save(
        &self,
        key: &str,
        data: &str,
        tags: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;

    /// Fetches the data stored under the key, or `None` on a miss
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Deletes the entry stored under the key; idempotent
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Deletes every entry carrying at least one of the given tags
    ///
    /// Fails with [`CacheError::InvalidArgument`] when `tags` is empty.
    async fn delete_by_tags(&self, tags: &[String]) -> Result<(), CacheError>;

    /// Deletes every entry in the backing store
    async fn delete_all(&self) -> Result<(), CacheError>;
}

/// Extension trait providing typed save/get through JSON
pub trait CacheRepositoryExt: CacheRepository {
    /// Serializes a value to JSON and saves it under the key
    fn save_json<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        tags: &'a [String],
        ttl: Option<Duration>,
    ) -> impl std::future::Future<Output = Result<(), CacheError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|_| CacheError::Write)?;
            self.save(key, &data, tags, ttl).await
        }
    }

    /// Fetches and deserializes the value stored under the key
    fn get_json<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, CacheError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|_| CacheError::Read)?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }
}

// Blanket implementation for all types implementing CacheRepository
impl<T: CacheRepository + ?Sized> CacheRepositoryExt for T {}

/// Configuration for the default repository
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Pool namespace the backing store is resolved from
    pub namespace: String,
    /// Prefix prepended to hashed keys
    pub key_prefix: String,
    /// Tag implicitly attached to every saved entry
    pub reserved_tag: String,
    /// TTL used when a save does not supply one
    pub default_ttl: Duration,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            namespace: STORE_NAMESPACE.to_string(),
            key_prefix: KEY_PREFIX.to_string(),
            reserved_tag: RESERVED_TAG.to_string(),
            default_ttl: DEFAULT_TTL,
        }
    }
}

impl RepositoryConfig {
    /// Sets the pool namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Sets the reserved tag
    pub fn with_reserved_tag(mut self, tag: impl Into<String>) -> Self {
        self.reserved_tag = tag.into();
        self
    }

    /// Sets the default TTL
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// Default cache repository facade
///
/// Resolves its backing store lazily from the injected pool (once per
/// instance), derives hashed keys, prepends the reserved tag, and translates
/// every store failure into the operation's uniform error kind after logging
/// it once with context. Stateless per call apart from the cached handle.
#[derive(Debug)]
pub struct DefaultCacheRepository {
    pool: Arc<dyn StorePool>,
    hasher: Arc<dyn KeyHasher>,
    logger: Arc<dyn ErrorLogger>,
    config: RepositoryConfig,
    store: OnceCell<Arc<dyn CacheStore>>,
}

impl DefaultCacheRepository {
    /// Creates a repository with the default configuration
    pub fn new(
        pool: Arc<dyn StorePool>,
        hasher: Arc<dyn KeyHasher>,
        logger: Arc<dyn ErrorLogger>,
    ) -> Self {
        Self::with_config(pool, hasher, logger, RepositoryConfig::default())
    }

    /// Creates a repository with a custom configuration
    pub fn with_config(
        pool: Arc<dyn StorePool>,
        hasher: Arc<dyn KeyHasher>,
        logger: Arc<dyn ErrorLogger>,
        config: RepositoryConfig,
    ) -> Self {
        Self {
            pool,
            hasher,
            logger,
            config,
            store: OnceCell::new(),
        }
    }

    /// Derives the store-facing key for a caller-supplied key
    ///
    /// Pure function of the configured prefix and the hash of the caller
    /// key; identical caller keys always map to the same derived key.
    pub fn derive_key(&self, key: &str) -> String {
        format!("{}{}", self.config.key_prefix, self.hasher.hash(key))
    }

    /// Reserved tag prepended to the caller tags, order preserved, no dedup
    fn effective_tags(&self, tags: &[String]) -> Vec<String> {
        let mut all = Vec::with_capacity(tags.len() + 1);
        all.push(self.config.reserved_tag.clone());
        all.extend(tags.iter().cloned());
        all
    }

    /// Resolves the backing store, at most once per repository instance
    fn store(&self) -> Result<Arc<dyn CacheStore>, StoreError> {
        self.store
            .get_or_try_init(|| {
                self.pool.get(&self.config.namespace).ok_or_else(|| {
                    StoreError::new(format!(
                        "no usable store registered under namespace '{}'",
                        self.config.namespace
                    ))
                })
            })
            .cloned()
    }

    fn log_failure(&self, message: &str, key: Option<&str>, err: &StoreError) {
        let mut context = Map::new();
        if let Some(key) = key {
            context.insert("key".to_string(), Value::String(key.to_string()));
        }
        context.insert("message".to_string(), Value::String(err.to_string()));
        context.insert("trace".to_string(), Value::String(format!("{err:?}")));

        self.logger.error(message, Value::Object(context));
    }

    async fn save_inner(
        &self,
        key: &str,
        data: &str,
        tags: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let store = self.store()?;
        let cache_key = self.derive_key(key);
        let cache_tags = self.effective_tags(tags);
        let cache_ttl = ttl.unwrap_or(self.config.default_ttl);

        store.save(data, &cache_key, &cache_tags, cache_ttl).await
    }

    async fn get_inner(&self, key: &str) -> Result<Option<String>, StoreError> {
        let store = self.store()?;
        let cache_key = self.derive_key(key);

        store.load(&cache_key).await
    }

    async fn delete_inner(&self, key: &str) -> Result<(), StoreError> {
        let store = self.store()?;
        let cache_key = self.derive_key(key);

        store.remove(&cache_key).await
    }

    async fn clean_inner(&self, mode: CleanMode, tags: &[String]) -> Result<(), StoreError> {
        self.store()?.clean(mode, tags).await
    }
}

#[async_trait]
impl CacheRepository for DefaultCacheRepository {
    async fn save(
        &self,
        key: &str,
        data: &str,
        tags: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        self.save_inner(key, data, tags, ttl).await.map_err(|err| {
            self.log_failure("error while saving cache", Some(key), &err);
            CacheError::Write
        })
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get_inner(key).await.map_err(|err| {
            self.log_failure("error while getting cache", Some(key), &err);
            CacheError::Read
        })
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.delete_inner(key).await.map_err(|err| {
            self.log_failure("error while deleting cache", Some(key), &err);
            CacheError::Delete
        })
    }

    async fn delete_by_tags(&self, tags: &[String]) -> Result<(), CacheError> {
        // Caller-contract violation: checked before touching the store,
        // never logged.
        if tags.is_empty() {
            return Err(CacheError::invalid_argument("tags cannot be empty"));
        }

        self.clean_inner(CleanMode::MatchAnyTag, tags)
            .await
            .map_err(|err| {
                self.log_failure("error while deleting cache by tags", None, &err);
                CacheError::TagDelete
            })
    }

    async fn delete_all(&self) -> Result<(), CacheError> {
        self.clean_inner(CleanMode::All, &[])
            .await
            .map_err(|err| {
                self.log_failure("error while deleting all cache", None, &err);
                CacheError::Flush
            })
    }
}
