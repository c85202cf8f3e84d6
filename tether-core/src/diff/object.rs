//! Object Strategy
//!
//! Object-declared properties are diffed key by key, emitting mutations at
//! dotted sub-paths so unchanged siblings are left alone. Each key is
//! classified by the shape of its *previous* value: a previous object
//! recurses, a previous array goes through the splice calculus, anything
//! else is a terminal value comparison. Keys are visited in the current
//! value's insertion order, which fixes the instruction ordering.
//!
//! Only keys present in the current value are diffed. A key that existed
//! before and was removed from the state never produces an instruction, and
//! a nested object replaced by a scalar produces none either; both are
//! long-standing limitations of this diff, pinned by tests below.

use serde_json::{Map, Value};

use super::{array_changes, value_changes, Instructions, SpliceMismatch};
use crate::path;

/// Diff `previous` against `current` for an object-declared property.
///
/// A null current value is treated as the empty object. An absent or null
/// previous value cannot be recursed into, so the whole current object is
/// emitted via the value strategy.
pub fn object_changes(
    path: &str,
    previous: Option<&Value>,
    current: &Value,
) -> Result<Instructions, SpliceMismatch> {
    let empty = Map::new();
    let fields = match current {
        Value::Object(map) => map,
        _ => &empty,
    };

    let previous = match previous {
        None | Some(Value::Null) => {
            return Ok(value_changes(
                path,
                previous,
                &Value::Object(fields.clone()),
            ));
        }
        Some(value) => value,
    };

    let mut changes = Instructions::new();
    for (key, current_value) in fields {
        let key_path = path::join(path, key);
        let previous_value = previous.get(key);
        let sub = match previous_value {
            Some(Value::Object(_)) => object_changes(&key_path, previous_value, current_value)?,
            Some(Value::Array(_)) => array_changes(&key_path, previous_value, current_value)?,
            _ => value_changes(&key_path, previous_value, current_value),
        };
        changes.extend(sub);
    }

    Ok(changes)
}
