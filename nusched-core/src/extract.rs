//! Extraction of raw section records from a schedule response.
//!
//! Normalization happens in two explicit stages:
//! 1. [`unwrap_payload`] undoes the portal's double encoding (the response
//!    body is sometimes a JSON string holding the real JSON document).
//! 2. [`extract_sections`] walks `data.schedule[].sections`, flattening the
//!    registration "baskets" (lists of lists) one level.
//!
//! Nothing here fails: payloads that match neither the structured path nor
//! the fallback heuristic simply produce no records.

use log::{debug, warn};
use serde_json::Value;

use crate::resolve::{Record, is_truthy};

const SCHEDULE_KEYS: [&str; 2] = ["schedule", "studentSchedule"];
const REGISTERED_KEY: &str = "isRegistered";

/// Decode one level of string-wrapped JSON.
///
/// A string that does not hold JSON is returned unchanged; it will yield no
/// records downstream.
pub fn unwrap_payload(payload: Value) -> Value {
    match payload {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(inner) => {
                debug!("Unwrapped double-encoded schedule payload");
                inner
            }
            Err(e) => {
                warn!("Schedule payload is a string but not JSON: {}", e);
                Value::String(text)
            }
        },
        other => other,
    }
}

/// Collect the registered section records of a (decoded) schedule payload.
///
/// Records without an `isRegistered` key are kept. When the structured path
/// finds nothing, the payload itself (if it is a list of objects) or the first
/// top-level list of objects is used instead.
pub fn extract_sections(payload: &Value) -> Vec<Record> {
    let structured = registered(structured_sections(payload));
    if !structured.is_empty() {
        debug!("Extracted {} sections from schedule blocks", structured.len());
        return structured;
    }

    let fallback = registered(fallback_sections(payload));
    if !fallback.is_empty() {
        warn!(
            "Schedule blocks not found; using {} records from a top-level list",
            fallback.len()
        );
    }
    fallback
}

fn structured_sections(payload: &Value) -> Vec<Record> {
    let inner = payload.get("data").unwrap_or(payload);
    let Some(inner) = inner.as_object() else {
        return Vec::new();
    };

    let Some(blocks) = SCHEDULE_KEYS
        .iter()
        .filter_map(|key| inner.get(*key))
        .find(|value| is_truthy(value))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut sections = Vec::new();
    for block in blocks {
        let Some(items) = block.get("sections").and_then(Value::as_array) else {
            continue;
        };
        for item in items {
            match item {
                Value::Array(basket) => {
                    sections.extend(basket.iter().filter_map(Value::as_object).cloned());
                }
                Value::Object(section) => sections.push(section.clone()),
                _ => {}
            }
        }
    }
    sections
}

fn fallback_sections(payload: &Value) -> Vec<Record> {
    match payload {
        Value::Array(items) => objects(items),
        Value::Object(map) => map
            .values()
            .filter_map(Value::as_array)
            .find(|items| items.first().is_some_and(Value::is_object))
            .map(|items| objects(items))
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn objects(items: &[Value]) -> Vec<Record> {
    items.iter().filter_map(Value::as_object).cloned().collect()
}

fn registered(sections: Vec<Record>) -> Vec<Record> {
    sections
        .into_iter()
        .filter(|section| section.get(REGISTERED_KEY).is_none_or(is_truthy))
        .collect()
}
