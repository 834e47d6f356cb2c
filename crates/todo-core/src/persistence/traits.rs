//! Persistence Layer - Core Traits
//!
//! A string-keyed, string-valued store. Implementations can use browser
//! local storage, an in-memory map, etc.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous key-value storage.
///
/// Takes `&self` because browser storage is a shared handle; in-memory
/// implementations use interior mutability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite any previous value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;
}
