//! Todo Entity
//!
//! Represents a single task on the to-do list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// A task record
///
/// The identifier and creation timestamp are assigned once at creation and
/// never change afterwards; every other field is mutable in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier (UUID v4, immutable)
    pub id: String,
    /// Task text content
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Optional due label (free-form, e.g. "Tomorrow 9am")
    pub due: Option<String>,
    /// Optional project/category label
    pub project: Option<String>,
    /// Optional free-text description (inline markdown, see crate::markdown)
    pub description: Option<String>,
    /// Creation timestamp, set exactly once
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new incomplete task with a fresh identifier
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            due: None,
            project: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a due label
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Attach a project label
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

impl Entity for Todo {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
