//! Listener
//!
//! A listener is built once per bind and invoked on every store
//! notification. Each run pulls the current state, resolves every plan
//! entry in declaration order, diffs the resolved value against the
//! component's current value with the strategy matching the declared kind,
//! and applies the resulting instructions through the component's mutation
//! channels. A whole-value replacement on a read-only property routes
//! through the path-notification channel; splices always go through the
//! splice channel, read-only or not. After the last property, the component
//! receives the generic state-changed signal with the full new state.
//!
//! # Failure Policy
//!
//! A type mismatch is re-raised as [`Error::ArrayTypeMismatch`] with the
//! component tag and property name attached, aborting the remainder of the
//! run: later properties are not touched and no state-changed signal is
//! emitted. Direct `run()` callers get the error as a `Result`; the
//! subscription wrapper reports it through the diagnostics sink, since the
//! store contract gives listeners no return channel.
//!
//! The component's write lock is held for a full run, so one run's
//! mutations are atomic with respect to other readers. Dispatching
//! synchronously from inside a mutation channel would re-enter that lock;
//! state flows one way here, so no such flow exists.

use std::sync::{Arc, RwLock};

use crate::binding::component::Component;
use crate::binding::plan::BindingPlan;
use crate::binding::schema::PropertyKind;
use crate::diagnostics::Diagnostics;
use crate::diff::{array_changes, object_changes, value_changes, Instruction};
use crate::error::{Error, Result};
use crate::store::Store;

/// Per-bind listener: a compiled plan plus the handles it runs against.
pub struct Listener<C: Component> {
    component: Arc<RwLock<C>>,
    store: Arc<dyn Store>,
    plan: BindingPlan,
}

impl<C: Component> Listener<C> {
    /// Build a listener for a component, compiling its schema into a plan.
    ///
    /// The plan is fixed for the listener's lifetime; a component that
    /// unbinds and rebinds gets a fresh listener and a fresh plan.
    pub fn new(
        component: Arc<RwLock<C>>,
        store: Arc<dyn Store>,
        diagnostics: &dyn Diagnostics,
    ) -> Self {
        let plan = {
            let guard = component.read().expect("component lock poisoned");
            BindingPlan::build(guard.tag(), guard.schema(), diagnostics)
        };
        Self {
            component,
            store,
            plan,
        }
    }

    /// The compiled plan.
    pub fn plan(&self) -> &BindingPlan {
        &self.plan
    }

    /// Synchronize the component with the store's current state.
    pub fn run(&self) -> Result<()> {
        let state = self.store.get_state();
        let mut component = self.component.write().expect("component lock poisoned");

        for entry in self.plan.entries() {
            let current = entry.source.resolve(&state);
            let previous = component.current_value(&entry.name);

            let instructions = match entry.kind {
                PropertyKind::Value => Ok(value_changes(&entry.name, previous.as_ref(), &current)),
                PropertyKind::Array => array_changes(&entry.name, previous.as_ref(), &current),
                PropertyKind::Object => object_changes(&entry.name, previous.as_ref(), &current),
            }
            .map_err(|mismatch| Error::ArrayTypeMismatch {
                component: component.tag().to_string(),
                property: entry.name.clone(),
                actual: mismatch.actual,
            })?;

            for instruction in instructions {
                match instruction {
                    Instruction::Set { path, value } if entry.read_only => {
                        component.notify_path(&path, value);
                    }
                    Instruction::Set { path, value } => {
                        component.set_path(&path, value);
                    }
                    Instruction::Splice {
                        path,
                        start,
                        remove,
                        insert,
                    } => {
                        component.splice(&path, start, remove, insert);
                    }
                }
            }
        }

        component.emit_state_changed(&state);
        Ok(())
    }
}
