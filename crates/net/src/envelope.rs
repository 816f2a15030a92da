//! Permissive response-envelope unwrapping
//!
//! The backend serves list responses in one of three shapes: a bare JSON
//! array, `{"results": [...]}`, or `{"data": [...]}`. Anything else
//! normalizes to the empty sequence. This handling is load-bearing for
//! backend compatibility and must not be tightened.

use serde_json::Value;

/// Normalize a list response to its element sequence.
///
/// A `results`/`data` field that is present but not an array (e.g.
/// `{"results": null}`) is skipped with a debug log rather than treated as
/// an error, so `{"results": null, "data": [...]}` still yields the `data`
/// rows. Nothing usable normalizes to the empty sequence.
#[must_use]
pub fn unwrap_collection(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["results", "data"] {
                match map.remove(key) {
                    Some(Value::Array(items)) => return items,
                    Some(other) => {
                        tracing::debug!(key, value = %other, "non-array envelope field, skipping");
                    }
                    None => {}
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}
