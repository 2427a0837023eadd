//! Todo Store
//!
//! Ordered collection of tasks, newest-first. Create, toggle, delete,
//! clear-completed, plus the active/completed partition view.

use serde::{Deserialize, Serialize};

use crate::domain::{find_by_id, find_by_id_mut, Todo};
use crate::store::container::{Reduce, Store, SubscriptionId};
use crate::store::persist::SnapshotSink;

/// The todo collection, newest-first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoState {
    pub todos: Vec<Todo>,
}

impl TodoState {
    /// The welcome tasks shown on a first run
    pub fn starter() -> Self {
        Self {
            todos: vec![
                Todo::new("Welcome to your Todo List! ✅"),
                Todo::new("Try adding a new task above 👆"),
            ],
        }
    }

    /// Stable partition into active and completed tasks, preserving the
    /// stored order within each half. Computed on read, never stored.
    pub fn partition(&self) -> TodoView {
        let (completed, active) = self.todos.iter().cloned().partition(|t| t.completed);
        TodoView { active, completed }
    }
}

/// Derived read view of the collection
#[derive(Debug, Clone, PartialEq)]
pub struct TodoView {
    pub active: Vec<Todo>,
    pub completed: Vec<Todo>,
}

/// Mutations accepted by [`TodoState`]
#[derive(Debug, Clone)]
pub enum TodoAction {
    /// Create a task; rejected if `text` trims to empty
    Add {
        text: String,
        due: Option<String>,
        project: Option<String>,
    },
    /// Flip the completion flag
    Toggle { id: String },
    /// Replace the free-text description
    SetDescription {
        id: String,
        description: Option<String>,
    },
    /// Remove a task
    Delete { id: String },
    /// Remove every completed task
    ClearCompleted,
}

impl Reduce for TodoState {
    type Action = TodoAction;

    fn apply(&mut self, action: TodoAction) -> bool {
        match action {
            TodoAction::Add { text, due, project } => {
                if text.trim().is_empty() {
                    log::debug!("rejected todo with empty text");
                    return false;
                }
                let mut todo = Todo::new(text);
                todo.due = due;
                todo.project = project;
                // Newest-first: new tasks go to the front
                self.todos.insert(0, todo);
                true
            }
            TodoAction::Toggle { id } => match find_by_id_mut(&mut self.todos, id.as_str()) {
                Some(todo) => {
                    todo.completed = !todo.completed;
                    true
                }
                None => false,
            },
            TodoAction::SetDescription { id, description } => {
                match find_by_id_mut(&mut self.todos, id.as_str()) {
                    Some(todo) => {
                        todo.description = description;
                        true
                    }
                    None => false,
                }
            }
            TodoAction::Delete { id } => {
                let before = self.todos.len();
                self.todos.retain(|t| t.id != id);
                self.todos.len() != before
            }
            TodoAction::ClearCompleted => {
                let before = self.todos.len();
                self.todos.retain(|t| !t.completed);
                self.todos.len() != before
            }
        }
    }
}

/// Typed facade over `Store<TodoState>`
pub struct TodoStore {
    inner: Store<TodoState>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Store::default(),
        }
    }

    /// Create a store seeded with a restored or starter state
    pub fn with_state(state: TodoState) -> Self {
        Self {
            inner: Store::new(state),
        }
    }

    /// Add a task. Returns `false` (and changes nothing) for empty text.
    pub fn add(
        &self,
        text: impl Into<String>,
        due: Option<String>,
        project: Option<String>,
    ) -> bool {
        self.inner.dispatch(TodoAction::Add {
            text: text.into(),
            due,
            project,
        })
    }

    /// Flip a task's completion flag; no-op for unknown identifiers
    pub fn toggle(&self, id: &str) -> bool {
        self.inner.dispatch(TodoAction::Toggle { id: id.to_string() })
    }

    /// Replace a task's description; no-op for unknown identifiers
    pub fn set_description(&self, id: &str, description: Option<String>) -> bool {
        self.inner.dispatch(TodoAction::SetDescription {
            id: id.to_string(),
            description,
        })
    }

    /// Remove a task; no-op for unknown identifiers
    pub fn delete(&self, id: &str) -> bool {
        self.inner.dispatch(TodoAction::Delete { id: id.to_string() })
    }

    /// Remove every completed task
    pub fn clear_completed(&self) -> bool {
        self.inner.dispatch(TodoAction::ClearCompleted)
    }

    /// Snapshot the full collection, newest-first
    pub fn todos(&self) -> Vec<Todo> {
        self.inner.with(|s| s.todos.clone())
    }

    /// Look up a single task by identifier
    pub fn get(&self, id: &str) -> Option<Todo> {
        self.inner.with(|s| find_by_id(&s.todos, id).cloned())
    }

    /// The active/completed partition view
    pub fn view(&self) -> TodoView {
        self.inner.with(|s| s.partition())
    }

    /// Register a state-change listener
    pub fn subscribe(&self, listener: impl Fn(&TodoState) + 'static) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    /// Remove a state-change listener
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Attach the persistence sink
    pub fn attach_sink(&self, sink: Box<dyn SnapshotSink<TodoState>>) {
        self.inner.attach_sink(sink)
    }

    /// Replace the collection verbatim from a restored snapshot
    pub fn restore(&self, state: TodoState) {
        self.inner.restore(state)
    }
}
