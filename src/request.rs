//! Parsing of a browser "Copy as fetch" capture of the schedule request.
//!
//! Chrome DevTools → Network → right-click the schedule request →
//! Copy → Copy as fetch produces:
//!
//! ```text
//! fetch("https://…/Schedule/Student", {
//!   "headers": { … },
//!   "body": "{…}",
//!   "method": "POST"
//! });
//! ```
//!
//! The captured headers carry the student's session cookie, which is how the
//! fetch authenticates without a login flow of its own.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::{Map, Value};

static FETCH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fetch\s*\(\s*"([^"]+)""#).unwrap());

/// The parts of a captured request needed to replay it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

/// Parse a "Copy as fetch" capture into URL, headers and JSON body.
pub fn parse_captured_request(text: &str) -> Result<CapturedRequest> {
    let text = text.trim();
    if text.is_empty() {
        bail!("The captured request is empty.");
    }

    let Some(url_match) = FETCH_URL.captures(text) else {
        bail!(
            "Could not find a fetch(\"URL\", …) call.\n\
            Make sure you right-clicked the request in DevTools and chose \"Copy as fetch\"."
        );
    };
    let url = url_match[1].to_string();

    // Options object: from the first `{` after the URL to the last `}`
    let rest = &text[url_match.get(0).map_or(0, |m| m.end())..];
    let (Some(first), Some(last)) = (rest.find('{'), rest.rfind('}')) else {
        bail!("Could not find the request options object {{ … }}.");
    };
    if last <= first {
        bail!("Could not find the request options object {{ … }}.");
    }

    let options: Value = serde_json::from_str(&rest[first..=last])
        .context("Could not parse the request options as JSON")?;

    let headers: BTreeMap<String, String> = options
        .get("headers")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(name, value)| Some((name.clone(), value.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let body = match options.get("body") {
        Some(Value::String(raw)) => serde_json::from_str(raw).unwrap_or_else(|_| empty_object()),
        Some(Value::Object(map)) => Value::Object(map.clone()),
        _ => empty_object(),
    };

    Ok(CapturedRequest { url, headers, body })
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
