//! Tagcache
//!
//! A tag-addressable caching facade with support for:
//! - Hashed, collision-resistant cache keys derived from caller identifiers
//! - Group invalidation of entries sharing a tag, and full flush
//! - Uniform error translation that hides backing store failure modes
//! - Pluggable backing stores, hashers, and error loggers
//!
//! The repository resolves its backing store lazily from an injected pool
//! and attaches a reserved tag to every entry it owns, so the whole
//! repository can be flushed by tag even on stores without a native flush.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    CacheError, CacheRepository, CacheRepositoryExt, CacheStore, CleanMode,
    DefaultCacheRepository, ErrorLogger, KeyHasher, RepositoryConfig, Sha256Hasher, StoreError,
    StorePool, TracingLogger,
};
pub use infrastructure::{InMemoryStore, InMemoryStoreConfig, StaticStorePool, StoreFactory};
