//! Ordered fallback lookup over loosely-typed JSON records.
//!
//! The portal renames fields between versions, so every logical field is read
//! through a list of candidate keys: the first key whose value is present and
//! non-empty wins.

use serde_json::{Map, Value};

/// A JSON object as found in the payload.
pub type Record = Map<String, Value>;

/// Whether a value counts as "present": not null, not false, not zero, not an
/// empty string, list or object.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// First present value among `keys`, in order.
pub fn first_value<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_truthy(value))
}

/// First present scalar among `keys`, rendered as text.
///
/// Strings are returned as-is and numbers in decimal form. Lists and objects
/// never resolve as text, so the lookup moves on to the next key.
pub fn first_text(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter(|value| is_truthy(value))
        .find_map(scalar_text)
}

/// Like [`first_text`], but resolves to an empty string when nothing matches.
pub fn text_or_empty(record: &Record, keys: &[&str]) -> String {
    first_text(record, keys).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
