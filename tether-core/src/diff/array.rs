//! Array Strategy
//!
//! Array-declared properties are patched with positional splices so the
//! host framework can update list renderings incrementally. The strategy
//! degrades to a whole-value `Set` when the component holds no previous
//! array, and refuses non-array state values outright: a declared `Array`
//! meeting an object or scalar is a configuration mistake the caller must
//! see, not something to coerce.

use serde_json::Value;
use smallvec::smallvec;
use thiserror::Error;

use super::{splice, Instruction, Instructions};
use crate::path::kind_of;

/// A value of the wrong shape met the splice calculus.
///
/// The listener re-raises this with the component and property attached.
#[derive(Debug, Error, PartialEq)]
#[error("{path} expected an array but found {actual}")]
pub struct SpliceMismatch {
    pub path: String,
    pub actual: &'static str,
}

/// Diff `previous` against `current` for an array-declared property.
///
/// A null current value is treated as the empty array. An absent or null
/// previous value cannot be diffed against, so the full current array is
/// emitted as one `Set`.
pub fn array_changes(
    path: &str,
    previous: Option<&Value>,
    current: &Value,
) -> Result<Instructions, SpliceMismatch> {
    static EMPTY: &[Value] = &[];

    let current_items: &[Value] = match current {
        Value::Array(items) => items,
        Value::Null => EMPTY,
        other => {
            return Err(SpliceMismatch {
                path: path.to_string(),
                actual: kind_of(other),
            })
        }
    };

    let previous_items: &[Value] = match previous {
        None | Some(Value::Null) => {
            return Ok(smallvec![Instruction::Set {
                path: path.to_string(),
                value: Value::Array(current_items.to_vec()),
            }]);
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SpliceMismatch {
                path: path.to_string(),
                actual: kind_of(other),
            })
        }
    };

    Ok(splice::calculate(previous_items, current_items)
        .into_iter()
        .map(|splice| Instruction::Splice {
            path: path.to_string(),
            start: splice.start,
            remove: splice.removed,
            insert: splice.inserted,
        })
        .collect())
}
