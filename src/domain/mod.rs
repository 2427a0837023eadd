//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono/uuid for
//! serialization, timestamps and identifiers).

mod entity;
mod note;
mod todo;

pub use entity::{find_by_id, find_by_id_mut, DomainError, DomainResult, Entity};
pub use note::{Note, NoteColor};
pub use todo::Todo;
