//! Persistence Layer
//!
//! Key-value storage abstraction and the adapter that mirrors state into it.

mod traits;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::PersistentStore;
