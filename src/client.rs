//! Replaying a captured schedule request against the portal.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::request::CapturedRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headers the HTTP client sets itself.
const SKIPPED_HEADERS: [&str; 4] = ["content-length", "host", "accept-encoding", "connection"];

/// POST the captured body to the captured URL and return the decoded
/// schedule payload (double encoding already undone).
pub async fn fetch_schedule(request: &CapturedRequest) -> Result<Value> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(&request.url)
        .headers(header_map(request))
        .json(&request.body)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", request.url))?;

    let status = response.status();
    debug!("Schedule request returned {}", status);
    let response = response
        .error_for_status()
        .context("The portal rejected the request; the captured session may have expired")?;

    let payload: Value = response
        .json()
        .await
        .context("The portal response was not JSON")?;

    Ok(nusched_core::extract::unwrap_payload(payload))
}

fn header_map(request: &CapturedRequest) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (name, value) in &request.headers {
        if SKIPPED_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
            continue;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Skipping invalid captured header {:?}", name),
        }
    }

    headers
}
