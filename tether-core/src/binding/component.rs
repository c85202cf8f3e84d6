//! Component Contract
//!
//! The host framework owns the live component: its property bag, its
//! rendering, its lifecycle events. The binding engine only needs the
//! narrow surface below — identity for error messages, the declared
//! schema, a way to read a property's current value, three mutation
//! channels, a state-changed signal, and the optional local action
//! namespace used by named dispatch.

use serde_json::Value;
use std::sync::Arc;

use super::schema::PropertySchema;

/// A local action creator: invoked with the rest arguments of a named
/// dispatch, returns the action object to hand to the store.
pub type ActionCreator = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// The surface a host component exposes to the binding engine.
pub trait Component {
    /// Identifier used in error messages and warnings, e.g. `"todo-list"`.
    fn tag(&self) -> &str;

    /// The declared property schema.
    fn schema(&self) -> &PropertySchema;

    /// Current value of a top-level property, or `None` when the property
    /// has never been set.
    fn current_value(&self, name: &str) -> Option<Value>;

    /// Replace the value at a dotted property path.
    fn set_path(&mut self, path: &str, value: Value);

    /// Notify the host that the value at a path changed, without going
    /// through a settable assignment. Used for read-only properties.
    fn notify_path(&mut self, path: &str, value: Value);

    /// Positionally edit the array at a path: remove `remove` elements at
    /// `start`, insert `insert` there.
    fn splice(&mut self, path: &str, start: usize, remove: usize, insert: Vec<Value>);

    /// Emit the generic state-changed signal carrying the full new state.
    fn emit_state_changed(&mut self, state: &Value);

    /// Look up a local action creator by name.
    fn action(&self, name: &str) -> Option<ActionCreator>;
}
