//! Deskboard Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - store: Observable state containers and persistence seam
//! - markdown: Inline markdown-lite renderer
//! - labels: Deterministic label color assignment

pub mod domain;
pub mod labels;
pub mod markdown;
pub mod store;

pub use domain::{DomainError, DomainResult, Entity, Note, NoteColor, Todo};
pub use labels::{label_color, LabelColor};
pub use markdown::{render_inline, Segment};
pub use store::{
    JsonFileSink, NoteAction, NotesState, NotesStore, Reduce, SnapshotSink, Store, SubscriptionId,
    TodoAction, TodoState, TodoStore, TodoView,
};
