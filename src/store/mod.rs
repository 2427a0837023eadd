//! Store Layer
//!
//! Observable state containers and the persistence seam.

mod container;
mod notes_store;
mod persist;
mod todo_store;


pub use container::{Reduce, Store, SubscriptionId};
pub use notes_store::{NoteAction, NotesState, NotesStore};
pub use persist::{JsonFileSink, SnapshotSink};
pub use todo_store::{TodoAction, TodoState, TodoStore, TodoView};
