//! Store Contract
//!
//! The store is an external collaborator: a single container of
//! authoritative application state, readable through `get_state`, mutable
//! only through `dispatch`, and observable through `subscribe`. This module
//! defines the trait the binding engine consumes, plus [`ReducerStore`], a
//! minimal synchronous implementation used by the crate's own tests and
//! handy for downstream integration tests. Reducer composition and
//! middleware are deliberately not modeled.
//!
//! # Notification Order
//!
//! `ReducerStore` notifies listeners synchronously, on the dispatching
//! thread, in subscription order. The listener registry lock is released
//! before callbacks run, so a callback may read state or dispatch-adjacent
//! APIs without deadlocking the registry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// Counter for generating unique listener ids.
static LISTENER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_listener_id() -> u64 {
    LISTENER_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Callback invoked after every dispatched action.
pub type StoreListener = Box<dyn Fn() + Send + Sync>;

/// One-shot handle cancelling a store subscription.
///
/// Consumed on call, mirroring how the subscription it guards can only be
/// torn down once.
pub struct Unsubscribe(Box<dyn FnOnce() + Send + Sync>);

impl Unsubscribe {
    /// Wrap a cancellation closure.
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self(Box::new(cancel))
    }

    /// Cancel the subscription.
    pub fn call(self) {
        (self.0)()
    }
}

impl std::fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe").finish()
    }
}

/// The state container the binding engine attaches to.
pub trait Store: Send + Sync {
    /// Current state tree.
    fn get_state(&self) -> Value;

    /// Apply an action and notify listeners. Returns whatever the store
    /// decides to return, conventionally the dispatched action.
    fn dispatch(&self, action: Value) -> Value;

    /// Register a listener invoked after every dispatch.
    fn subscribe(&self, listener: StoreListener) -> Unsubscribe;
}

/// Reducer deriving the next state from the current state and an action.
pub type Reducer = Box<dyn Fn(&Value, &Value) -> Value + Send + Sync>;

/// Minimal synchronous store driven by a single reducer.
pub struct ReducerStore {
    state: RwLock<Value>,
    reducer: Reducer,
    listeners: Arc<RwLock<Vec<(u64, Arc<dyn Fn() + Send + Sync>)>>>,
}

impl ReducerStore {
    /// Create a store with an initial state and a reducer.
    pub fn new(initial: Value, reducer: impl Fn(&Value, &Value) -> Value + Send + Sync + 'static) -> Self {
        Self {
            state: RwLock::new(initial),
            reducer: Box::new(reducer),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl Store for ReducerStore {
    fn get_state(&self) -> Value {
        self.state.read().clone()
    }

    fn dispatch(&self, action: Value) -> Value {
        {
            let mut state = self.state.write();
            let next = (self.reducer)(&state, &action);
            *state = next;
        }

        // Snapshot the callbacks so the registry lock is not held while
        // listeners run.
        let callbacks: Vec<Arc<dyn Fn() + Send + Sync>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }

        action
    }

    fn subscribe(&self, listener: StoreListener) -> Unsubscribe {
        let id = next_listener_id();
        self.listeners
            .write()
            .push((id, Arc::from(listener)));

        let listeners = Arc::clone(&self.listeners);
        Unsubscribe::new(move || {
            listeners.write().retain(|(entry_id, _)| *entry_id != id);
        })
    }
}

impl std::fmt::Debug for ReducerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducerStore")
            .field("state", &*self.state.read())
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
