//! Cache key hashing

use std::fmt::Debug;

use sha2::{Digest, Sha256};

/// One-way hash over caller-supplied cache identifiers
///
/// Implementations must be deterministic across processes and repository
/// instances: the repository relies on `hash` being a pure, salt-free
/// function so that repeated saves, gets and deletes with the same caller
/// key resolve to the same entry.
pub trait KeyHasher: Send + Sync + Debug {
    /// Hashes the input into a fixed-alphabet digest string
    fn hash(&self, input: &str) -> String;
}

/// SHA-256 hasher producing 64 lowercase hex characters
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl KeyHasher for Sha256Hasher {
    fn hash(&self, input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }
}
