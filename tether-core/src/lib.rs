//! Tether Core
//!
//! This crate provides the state-binding engine for the Tether UI framework.
//! It implements:
//!
//! - Notification strategies computing minimal property mutations (whole-value
//!   replacement, keyed object diffing, positional array splices)
//! - A per-component listener keeping bound properties in sync with the store
//! - The subscription lifecycle guaranteeing one listener per component
//! - A polymorphic dispatch adapter and the per-store binder tying it together
//!
//! State flows one way: store → component. Components influence state only by
//! dispatching actions; two-way bindings are warned against.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `store`: the store contract, plus a minimal reducer-driven store for tests
//! - `diff`: the three notification strategies and the splice calculus
//! - `binding`: property schema, compiled plan, listener, subscription lifecycle
//! - `dispatch`: the three dispatch shapes resolved to exactly one store action
//! - `behavior`: the per-store binder composed into component definitions
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use tether_core::behavior::Binder;
//! use tether_core::binding::{BoundComponent, PropertySchema, PropertySpec};
//! use tether_core::store::ReducerStore;
//!
//! // A store with a single counter.
//! let store = Arc::new(ReducerStore::new(json!({"count": 0}), |state, action| {
//!     match action["type"].as_str() {
//!         Some("INC") => json!({"count": state["count"].as_i64().unwrap() + 1}),
//!         _ => state.clone(),
//!     }
//! }));
//!
//! // Components declare which properties mirror state.
//! let schema = PropertySchema::new()
//!     .with("count", PropertySpec::value().path("count"));
//!
//! let binder = Binder::new(Some(store))?;
//! let mut counter = BoundComponent::new(CounterElement::new(schema));
//!
//! binder.attached(&mut counter)?;                             // sync + subscribe
//! binder.dispatch(&counter, json!({"type": "INC"}).into())?;  // "count" mirrors 1
//! binder.detached(&mut counter);                              // unsubscribe
//! ```

pub mod behavior;
pub mod binding;
pub mod diagnostics;
pub mod diff;
pub mod dispatch;
pub mod error;
pub mod path;
pub mod store;

pub use behavior::Binder;
pub use dispatch::ActionInput;
pub use error::{Error, Result};
