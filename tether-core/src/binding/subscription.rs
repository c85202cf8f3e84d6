//! Subscription Lifecycle
//!
//! [`BoundComponent`] wraps a shared component handle together with the
//! optional store subscription guarding it. "Is this component bound" is
//! that typed `Option`, not a hidden dynamic property: [`bind`] is a no-op
//! while a handle is present, [`unbind`] consumes it. At most one live
//! subscription per component instance, ever — a second subscription would
//! apply every mutation twice on each state change.
//!
//! Binding runs the listener once synchronously before subscribing, so the
//! component's first render already reflects current state. If that initial
//! sync fails, no subscription is established and the error propagates to
//! the caller.

use std::sync::{Arc, RwLock};

use crate::binding::component::Component;
use crate::binding::listener::Listener;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::store::{Store, Unsubscribe};

/// A component handle plus its subscription state.
pub struct BoundComponent<C: Component> {
    component: Arc<RwLock<C>>,
    subscription: Option<Unsubscribe>,
}

impl<C: Component> BoundComponent<C> {
    /// Wrap a component, initially unbound.
    pub fn new(component: C) -> Self {
        Self::from_shared(Arc::new(RwLock::new(component)))
    }

    /// Wrap an already-shared component handle, initially unbound.
    pub fn from_shared(component: Arc<RwLock<C>>) -> Self {
        Self {
            component,
            subscription: None,
        }
    }

    /// The shared component handle.
    pub fn component(&self) -> &Arc<RwLock<C>> {
        &self.component
    }

    /// Whether a live store subscription exists.
    pub fn is_bound(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<C: Component> std::fmt::Debug for BoundComponent<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundComponent")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Bind a component to the store.
///
/// Idempotent: repeated attach events on an already-bound component do
/// nothing. Otherwise builds the listener, runs it once for the initial
/// sync, then subscribes it.
pub fn bind<C>(
    bound: &mut BoundComponent<C>,
    store: &Arc<dyn Store>,
    diagnostics: &Arc<dyn Diagnostics>,
) -> Result<()>
where
    C: Component + Send + Sync + 'static,
{
    if bound.is_bound() {
        return Ok(());
    }

    let listener = Arc::new(Listener::new(
        Arc::clone(&bound.component),
        Arc::clone(store),
        diagnostics.as_ref(),
    ));
    listener.run()?;

    let sink = Arc::clone(diagnostics);
    let subscribed = Arc::clone(&listener);
    let subscription = store.subscribe(Box::new(move || {
        if let Err(err) = subscribed.run() {
            sink.error(&err.to_string());
        }
    }));
    bound.subscription = Some(subscription);

    tracing::debug!(target: "tether", "component bound to store");
    Ok(())
}

/// Release a component's store subscription.
///
/// Safe to call repeatedly, and on components that were never bound.
pub fn unbind<C: Component>(bound: &mut BoundComponent<C>) {
    if let Some(subscription) = bound.subscription.take() {
        subscription.call();
        tracing::debug!(target: "tether", "component unbound from store");
    }
}
