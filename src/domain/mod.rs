//! Domain layer - Cache repository contracts and the default facade

pub mod error;
pub mod key;
pub mod logger;
pub mod repository;
pub mod store;

pub use error::CacheError;
pub use key::{KeyHasher, Sha256Hasher};
pub use logger::{ErrorLogger, TracingLogger};
pub use repository::{
    CacheRepository, CacheRepositoryExt, DefaultCacheRepository, RepositoryConfig,
};
pub use store::{CacheStore, CleanMode, StoreError, StorePool};
