//! State Paths
//!
//! Bound properties address the state tree with dotted path expressions:
//! `"user.profile.name"`, `"todos.0.label"`. Segments index into objects by
//! key and into arrays by decimal position. A lookup that runs off the tree
//! resolves to `None`; the listener treats that as null, so a path that does
//! not exist yet simply mirrors null into the component.

use serde_json::Value;

/// Resolve a dotted path against a state value.
///
/// Returns `None` when any segment is missing, out of bounds, or descends
/// into a scalar.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cursor = root;
    for segment in path.split('.') {
        cursor = match cursor {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(cursor)
}

/// Extend a path with one more key.
pub fn join(base: &str, key: &str) -> String {
    format!("{base}.{key}")
}

/// Human-readable kind of a state value, used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
