//! Kanban Todo Core
//!
//! Layered architecture:
//! - domain: Entities (users, tasks, comments) and domain errors
//! - state: In-memory state, the controller that mutates it, change notifications
//! - persistence: Key-value storage abstraction and the adapter that mirrors state into it
//! - config: Storage slot names and seed data

pub mod config;
pub mod domain;
pub mod persistence;
pub mod state;

pub use config::{seed_users, StorageKeys};
pub use domain::{Board, Bucket, Comment, DomainError, DomainResult, Entity, Task, User};
pub use persistence::{KeyValueStore, MemoryStore, PersistentStore, StoreError, StoreResult};
pub use state::{Clock, IdCounters, LocalClock, StateChange, StateObserver, TodoController, TodoState};
