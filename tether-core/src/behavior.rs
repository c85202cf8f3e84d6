//! Binder
//!
//! One [`Binder`] is created per store and shared across every component
//! definition in the application. It exposes the lifecycle hooks a host
//! framework wires into its components — `created` and `attached` both bind
//! (hosts fire either or both across ready/insert transitions), `detached`
//! unbinds — plus the public `dispatch` and `get_state` surface.
//!
//! Warnings and store-callback failures go through an injectable
//! [`Diagnostics`] sink; the default forwards to `tracing`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::binding::{bind, unbind, BoundComponent, Component};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::dispatch::{dispatch_action, ActionInput};
use crate::error::{Error, Result};
use crate::store::Store;

/// Per-store binding capability, composed into component definitions.
pub struct Binder {
    store: Arc<dyn Store>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Binder {
    /// Create a binder for a store.
    ///
    /// A store is mandatory and there is no default; `None` fails with
    /// [`Error::MissingStore`] before any component can bind.
    pub fn new(store: Option<Arc<dyn Store>>) -> Result<Self> {
        let store = store.ok_or(Error::MissingStore)?;
        Ok(Self {
            store,
            diagnostics: Arc::new(TracingDiagnostics),
        })
    }

    /// Replace the default tracing-backed diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Host "created"/"ready" lifecycle hook: bind the component.
    pub fn created<C>(&self, bound: &mut BoundComponent<C>) -> Result<()>
    where
        C: Component + Send + Sync + 'static,
    {
        bind(bound, &self.store, &self.diagnostics)
    }

    /// Host "attached"/"inserted" lifecycle hook: bind the component.
    ///
    /// Binding is idempotent, so a host firing both `created` and `attached`
    /// still ends up with exactly one subscription.
    pub fn attached<C>(&self, bound: &mut BoundComponent<C>) -> Result<()>
    where
        C: Component + Send + Sync + 'static,
    {
        bind(bound, &self.store, &self.diagnostics)
    }

    /// Host "detached"/"removed" lifecycle hook: release the subscription.
    pub fn detached<C: Component>(&self, bound: &mut BoundComponent<C>) {
        unbind(bound);
    }

    /// Dispatch an action through a component to the store.
    ///
    /// Returns whatever the store's dispatch returned.
    pub fn dispatch<C: Component>(
        &self,
        bound: &BoundComponent<C>,
        input: ActionInput,
    ) -> Result<Value> {
        let component = bound.component().read().expect("component lock poisoned");
        dispatch_action(&*component, self.store.as_ref(), input)
    }

    /// Current state of the store.
    pub fn get_state(&self) -> Value {
        self.store.get_state()
    }
}

impl fmt::Debug for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder").finish()
    }
}
