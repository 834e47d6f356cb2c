//! Domain Layer - Core Entity Trait
//!
//! Every entity has an identifier; lookups over entity slices go through it.

use thiserror::Error;

use super::task::Bucket;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Eq + ?Sized;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Index of the entity with `id` in `entities`
pub(crate) fn position_of<T: Entity>(entities: &[T], id: &T::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Reasons a mutation was rejected.
///
/// A rejected mutation never changes state; the view treats every variant
/// as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} is empty")]
    EmptyInput(&'static str),
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error("task {0} not found")]
    TaskNotFound(u32),
    #[error("user {0} not found")]
    UserNotFound(String),
    #[error("task {0} is already {1}")]
    AlreadyInBucket(u32, Bucket),
    #[error("no {0} ids left")]
    IdsExhausted(&'static str),
}

/// Trimmed input, or `EmptyInput` when nothing but whitespace is left
pub(crate) fn non_blank<'a>(field: &'static str, value: &'a str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::EmptyInput(field))
    } else {
        Ok(trimmed)
    }
}
