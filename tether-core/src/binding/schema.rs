//! Property Schema
//!
//! Components declare up front which of their properties mirror state. The
//! schema is an explicit, insertion-ordered description built once at
//! component-registration time; nothing is discovered by reflection at run
//! time. Declaration order matters: it is the order the listener resolves,
//! diffs and mutates properties in.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Declared shape of a bound property, deciding which notification strategy
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    /// Whole-value replacement. The default for scalars and anything not
    /// declared otherwise.
    Value,
    /// Positional splice diffing.
    Array,
    /// Keyed per-sub-path diffing.
    Object,
}

/// Where a bound property's value comes from in the state tree.
#[derive(Clone)]
pub enum StateSource {
    /// The entire state value.
    WholeState,
    /// A dotted path into the state tree.
    Path(String),
    /// An arbitrary selector over the state.
    Selector(Arc<dyn Fn(&Value) -> Value + Send + Sync>),
}

impl StateSource {
    /// Resolve this source against a state value. Missing paths resolve to
    /// null.
    pub fn resolve(&self, state: &Value) -> Value {
        match self {
            StateSource::WholeState => state.clone(),
            StateSource::Path(path) => crate::path::get(state, path)
                .cloned()
                .unwrap_or(Value::Null),
            StateSource::Selector(select) => select(state),
        }
    }
}

impl fmt::Debug for StateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateSource::WholeState => f.write_str("WholeState"),
            StateSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            StateSource::Selector(_) => f.write_str("Selector"),
        }
    }
}

/// Declaration for a single component property.
///
/// Built by chaining: `PropertySpec::array().path("app.todos").read_only()`.
/// A spec without a state source describes an ordinary, unbound property;
/// the plan builder skips it.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    kind: PropertyKind,
    source: Option<StateSource>,
    read_only: bool,
    notify: bool,
}

impl PropertySpec {
    fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            source: None,
            read_only: false,
            notify: false,
        }
    }

    /// A scalar (or otherwise whole-value) property.
    pub fn value() -> Self {
        Self::new(PropertyKind::Value)
    }

    /// An array property, patched by splices.
    pub fn array() -> Self {
        Self::new(PropertyKind::Array)
    }

    /// An object property, patched per sub-path.
    pub fn object() -> Self {
        Self::new(PropertyKind::Object)
    }

    /// Bind to the whole state value.
    pub fn bound(mut self) -> Self {
        self.source = Some(StateSource::WholeState);
        self
    }

    /// Bind to a dotted state path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.source = Some(StateSource::Path(path.into()));
        self
    }

    /// Bind through a selector function over the state.
    pub fn selector(mut self, select: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        self.source = Some(StateSource::Selector(Arc::new(select)));
        self
    }

    /// Mark the property read-only: value replacements route through the
    /// host's path-notification channel instead of a settable assignment.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Declare two-way notification. Binding such a property without
    /// `read_only` draws a warning at plan-build time; state still flows
    /// one way.
    pub fn notify(mut self) -> Self {
        self.notify = true;
        self
    }

    /// The declared kind.
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The state source, if the property is bound.
    pub fn source(&self) -> Option<&StateSource> {
        self.source.as_ref()
    }

    /// Whether the property is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the property declares two-way notification.
    pub fn is_notify(&self) -> bool {
        self.notify
    }
}

/// Ordered map of property declarations for one component type.
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    properties: IndexMap<String, PropertySpec>,
}

impl PropertySchema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, chaining. Re-declaring a name replaces the spec but
    /// keeps its original position.
    pub fn with(mut self, name: impl Into<String>, spec: PropertySpec) -> Self {
        self.properties.insert(name.into(), spec);
        self
    }

    /// Look up a property declaration.
    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.get(name)
    }

    /// Iterate declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the schema declares nothing.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
