//! Notification Strategies
//!
//! This module computes the property mutations that bring a component back
//! in sync with the store after a state change. Three strategies exist, one
//! per declared property kind:
//!
//! ## Value
//!
//! The terminal strategy. Emits a single whole-value `Set` when the previous
//! and current values differ, nothing otherwise. Used for scalars and for
//! anything the other strategies cannot diff.
//!
//! ## Array
//!
//! Computes the minimal ordered sequence of positional splices transforming
//! the previous array into the current one, so the host framework can patch
//! list renderings instead of rebuilding them. Falls back to a whole-value
//! `Set` when there is no previous array to diff against.
//!
//! ## Object
//!
//! Recurses key by key, building dotted sub-paths and delegating each key to
//! the strategy matching the previous value's shape. Keys are visited in the
//! current value's insertion order, which fixes instruction ordering.
//!
//! # Equality
//!
//! All three strategies compare values structurally (`PartialEq` on
//! `serde_json::Value`). The splice calculus and its `apply` helper share
//! the same notion, so splices round-trip exactly.

mod array;
mod instruction;
mod object;
pub mod splice;
mod value;

pub use array::{array_changes, SpliceMismatch};
pub use instruction::{Instruction, Instructions};
pub use object::object_changes;
pub use value::value_changes;
