//! Observable State Container
//!
//! A single-threaded, synchronous state container: state is read through
//! snapshots, mutated through dispatched actions, and observed through
//! ordered listener notification. This is the single-writer pattern the
//! dashboard UI drives from its event loop; there is no locking because
//! there are no concurrent writers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::store::persist::SnapshotSink;

/// Reducer contract: a state type that can apply typed actions
pub trait Reduce {
    /// The action/mutation type this state accepts
    type Action;

    /// Apply an action in place, returning whether the state changed.
    ///
    /// Policy no-ops (unknown identifier, rejected input) return `false`.
    fn apply(&mut self, action: Self::Action) -> bool;
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Rc<dyn Fn(&S)>;

/// Observable state container
///
/// Listeners are notified synchronously, in subscription order, after every
/// dispatch that changed state; the attached snapshot sink (if any) runs
/// after the listeners. A dispatch whose reducer reports no change notifies
/// nobody — there is no new state to observe or persist.
///
/// Re-entrancy during notification is defined: each dispatch notifies the
/// listeners registered when it committed, with the state snapshot taken
/// right after its mutation. A listener unsubscribed mid-notification is
/// skipped; one subscribed mid-notification first hears about the next
/// change; a listener may itself dispatch, which runs a full nested
/// notify/persist cycle before the outer one resumes.
pub struct Store<S: Reduce> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<S>)>>,
    sink: RefCell<Option<Box<dyn SnapshotSink<S>>>>,
    next_subscription: Cell<u64>,
}

impl<S: Reduce + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Reduce> Store<S> {
    /// Create a store holding the given initial state
    pub fn new(state: S) -> Self {
        Self {
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            sink: RefCell::new(None),
            next_subscription: Cell::new(0),
        }
    }

    /// Read the state through a borrow, without cloning
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Snapshot the current state
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.state.borrow().clone()
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&self, action: S::Action) -> bool
    where
        S: Clone,
    {
        let changed = self.state.borrow_mut().apply(action);
        if changed {
            // Snapshot outside the cell so listeners may re-enter the store
            let state = self.state.borrow().clone();
            self.notify(&state);
            self.persist(&state);
        }
        changed
    }

    /// Replace the state verbatim, e.g. from a restored snapshot.
    ///
    /// Intended for use before first read; notifies nobody.
    pub fn restore(&self, state: S) {
        *self.state.borrow_mut() = state;
    }

    /// Register a listener; it will be called after every state change
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    /// Attach the snapshot sink invoked after each successful mutation
    pub fn attach_sink(&self, sink: Box<dyn SnapshotSink<S>>) {
        *self.sink.borrow_mut() = Some(sink);
    }

    fn notify(&self, state: &S) {
        // Walk the subscription ids registered at dispatch time, looking
        // each listener up per call: no borrow is held while a listener
        // runs, so listeners can subscribe, unsubscribe, and dispatch.
        let ids: Vec<SubscriptionId> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            let listener = self
                .listeners
                .borrow()
                .iter()
                .find(|(sub, _)| *sub == id)
                .map(|(_, listener)| Rc::clone(listener));
            if let Some(listener) = listener {
                listener(state);
            }
        }
    }

    fn persist(&self, state: &S) {
        let mut sink = self.sink.borrow_mut();
        if let Some(sink) = sink.as_mut() {
            if let Err(e) = sink.persist(state) {
                // A failed snapshot must never fail or roll back the mutation
                log::warn!("snapshot sink failed: {}", e);
            }
        }
    }
}
