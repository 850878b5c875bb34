//! Infrastructure layer - Concrete backing stores and wiring

pub mod factory;
pub mod in_memory;

pub use factory::{StaticStorePool, StoreFactory};
pub use in_memory::{InMemoryStore, InMemoryStoreConfig};
