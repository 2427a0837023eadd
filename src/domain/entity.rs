//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique, immutable identifier.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Find an entity in an ordered collection by identifier
pub fn find_by_id<'a, E, Q>(entities: &'a [E], id: &Q) -> Option<&'a E>
where
    E: Entity,
    E::Id: Borrow<Q>,
    Q: Eq + ?Sized,
{
    entities.iter().find(|e| e.id().borrow() == id)
}

/// Find an entity mutably by identifier (used by the store reducers)
pub fn find_by_id_mut<'a, E, Q>(entities: &'a mut [E], id: &Q) -> Option<&'a mut E>
where
    E: Entity,
    E::Id: Borrow<Q>,
    Q: Eq + ?Sized,
{
    entities.iter_mut().find(|e| e.id().borrow() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// The store operations themselves are policy no-ops and never fail;
/// only the persistence seam produces errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Persistence(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, NoteColor, Todo};

    #[test]
    fn test_find_by_id() {
        let todos = vec![Todo::new("first"), Todo::new("second")];
        let id = todos[1].id.clone();

        let found = find_by_id(&todos, id.as_str());
        assert_eq!(found.map(|t| t.text.as_str()), Some("second"));
        assert!(find_by_id(&todos, "missing").is_none());
    }

    #[test]
    fn test_find_by_id_mut() {
        let mut notes = vec![Note::new("title", "old", NoteColor::Yellow)];
        let id = notes[0].id.clone();

        if let Some(note) = find_by_id_mut(&mut notes, id.as_str()) {
            note.text = "new".to_string();
        }
        assert_eq!(notes[0].text, "new");
        assert!(find_by_id_mut(&mut notes, "missing").is_none());
    }
}
