//! Value Strategy
//!
//! The terminal strategy: replace the whole value when it changed, do
//! nothing when it did not. Scalars always land here, and the array/object
//! strategies degrade to it when they have no previous value to diff
//! against.

use serde_json::Value;
use smallvec::smallvec;

use super::{Instruction, Instructions};

/// Emit a single `Set` iff `previous` is absent or differs from `current`.
pub fn value_changes(path: &str, previous: Option<&Value>, current: &Value) -> Instructions {
    if previous == Some(current) {
        return Instructions::new();
    }
    smallvec![Instruction::Set {
        path: path.to_string(),
        value: current.clone(),
    }]
}
