//! Store pool and factory for runtime wiring

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::store::{CacheStore, StorePool};

use super::in_memory::{InMemoryStore, InMemoryStoreConfig};

/// Pool mapping namespaces to store instances
///
/// Built up front by the host, handed to repositories, which resolve their
/// namespace lazily on first use.
#[derive(Debug, Default)]
pub struct StaticStorePool {
    stores: HashMap<String, Arc<dyn CacheStore>>,
}

impl StaticStorePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a store under the namespace
    pub fn with_store(
        mut self,
        namespace: impl Into<String>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        self.stores.insert(namespace.into(), store);
        self
    }
}

impl StorePool for StaticStorePool {
    fn get(&self, namespace: &str) -> Option<Arc<dyn CacheStore>> {
        self.stores.get(namespace).cloned()
    }
}

/// Factory for creating backing store instances
#[derive(Debug, Default)]
pub struct StoreFactory;

impl StoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates an in-memory store with default settings
    pub fn create_in_memory(&self) -> Arc<dyn CacheStore> {
        Arc::new(InMemoryStore::new())
    }

    /// Creates an in-memory store with custom configuration
    pub fn create_in_memory_with_config(
        &self,
        config: InMemoryStoreConfig,
    ) -> Arc<dyn CacheStore> {
        Arc::new(InMemoryStore::with_config(config))
    }
}
