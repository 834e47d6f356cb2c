//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

pub(crate) mod entity;
mod user;
mod task;
mod comment;
mod board;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::User;
pub use task::{Task, Bucket};
pub use comment::Comment;
pub use board::{Board, tasks_for_user};
