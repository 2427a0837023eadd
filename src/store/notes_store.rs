//! Notes Store
//!
//! Ordered collection of sticky notes, oldest-first (deliberately the
//! opposite insertion policy of the todo store).

use serde::{Deserialize, Serialize};

use crate::domain::{find_by_id, find_by_id_mut, Note, NoteColor};
use crate::store::container::{Reduce, Store, SubscriptionId};
use crate::store::persist::SnapshotSink;

/// The note collection, oldest-first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesState {
    pub notes: Vec<Note>,
}

impl NotesState {
    /// The welcome notes shown on a first run
    pub fn starter() -> Self {
        Self {
            notes: vec![
                Note::new(
                    "Ideas 💡",
                    "Welcome to Sticky Notes! 📝\n\nClick the + button to add a new note.",
                    NoteColor::Yellow,
                ),
                Note::new(
                    "Shopping List",
                    "You can change colors 🎨\nand delete notes you don't need.",
                    NoteColor::Blue,
                ),
            ],
        }
    }
}

/// Mutations accepted by [`NotesState`]
#[derive(Debug, Clone)]
pub enum NoteAction {
    /// Create a note; always succeeds, even with empty title/text
    Add {
        title: String,
        text: String,
        color: NoteColor,
    },
    /// Replace the body text
    UpdateText { id: String, text: String },
    /// Replace the title
    UpdateTitle { id: String, title: String },
    /// Repaint the note
    ChangeColor { id: String, color: NoteColor },
    /// Remove a note
    Delete { id: String },
}

impl Reduce for NotesState {
    type Action = NoteAction;

    fn apply(&mut self, action: NoteAction) -> bool {
        match action {
            NoteAction::Add { title, text, color } => {
                // Oldest-first: new notes go to the back
                self.notes.push(Note::new(title, text, color));
                true
            }
            NoteAction::UpdateText { id, text } => {
                match find_by_id_mut(&mut self.notes, id.as_str()) {
                    Some(note) => {
                        note.text = text;
                        true
                    }
                    None => false,
                }
            }
            NoteAction::UpdateTitle { id, title } => {
                match find_by_id_mut(&mut self.notes, id.as_str()) {
                    Some(note) => {
                        note.title = title;
                        true
                    }
                    None => false,
                }
            }
            NoteAction::ChangeColor { id, color } => {
                match find_by_id_mut(&mut self.notes, id.as_str()) {
                    Some(note) => {
                        note.color = color;
                        true
                    }
                    None => false,
                }
            }
            NoteAction::Delete { id } => {
                let before = self.notes.len();
                self.notes.retain(|n| n.id != id);
                self.notes.len() != before
            }
        }
    }
}

/// Typed facade over `Store<NotesState>`
pub struct NotesStore {
    inner: Store<NotesState>,
}

impl Default for NotesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Store::default(),
        }
    }

    /// Create a store seeded with a restored or starter state
    pub fn with_state(state: NotesState) -> Self {
        Self {
            inner: Store::new(state),
        }
    }

    /// Add a note with the default yellow color
    pub fn add(&self, title: impl Into<String>, text: impl Into<String>) -> bool {
        self.add_colored(title, text, NoteColor::default())
    }

    /// Add a note with an explicit color
    pub fn add_colored(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        color: NoteColor,
    ) -> bool {
        self.inner.dispatch(NoteAction::Add {
            title: title.into(),
            text: text.into(),
            color,
        })
    }

    /// Replace a note's body text; no-op for unknown identifiers
    pub fn update_text(&self, id: &str, text: impl Into<String>) -> bool {
        self.inner.dispatch(NoteAction::UpdateText {
            id: id.to_string(),
            text: text.into(),
        })
    }

    /// Replace a note's title; no-op for unknown identifiers
    pub fn update_title(&self, id: &str, title: impl Into<String>) -> bool {
        self.inner.dispatch(NoteAction::UpdateTitle {
            id: id.to_string(),
            title: title.into(),
        })
    }

    /// Repaint a note; no-op for unknown identifiers
    pub fn change_color(&self, id: &str, color: NoteColor) -> bool {
        self.inner.dispatch(NoteAction::ChangeColor {
            id: id.to_string(),
            color,
        })
    }

    /// Repaint a note from a runtime color name.
    ///
    /// Names outside the palette are rejected as a no-op, same as an
    /// unknown identifier.
    pub fn change_color_named(&self, id: &str, color: &str) -> bool {
        match NoteColor::from_str(color) {
            Some(color) => self.change_color(id, color),
            None => {
                log::debug!("rejected unknown note color {:?}", color);
                false
            }
        }
    }

    /// Remove a note; no-op for unknown identifiers
    pub fn delete(&self, id: &str) -> bool {
        self.inner.dispatch(NoteAction::Delete { id: id.to_string() })
    }

    /// Snapshot the full collection, oldest-first
    pub fn notes(&self) -> Vec<Note> {
        self.inner.with(|s| s.notes.clone())
    }

    /// Look up a single note by identifier
    pub fn get(&self, id: &str) -> Option<Note> {
        self.inner.with(|s| find_by_id(&s.notes, id).cloned())
    }

    /// Register a state-change listener
    pub fn subscribe(&self, listener: impl Fn(&NotesState) + 'static) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    /// Remove a state-change listener
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Attach the persistence sink
    pub fn attach_sink(&self, sink: Box<dyn SnapshotSink<NotesState>>) {
        self.inner.attach_sink(sink)
    }

    /// Replace the collection verbatim from a restored snapshot
    pub fn restore(&self, state: NotesState) {
        self.inner.restore(state)
    }
}
