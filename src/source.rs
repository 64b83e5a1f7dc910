//! Where the schedule payload comes from: a saved JSON file, stdin, or a
//! live fetch replaying a captured request.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use log::debug;
use nusched_core::config::NuSchedConfig;
use serde_json::Value;

use crate::client;
use crate::request::{CapturedRequest, parse_captured_request};
use crate::utils::tui::create_spinner;

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Saved schedule response (JSON), or "-" for stdin
    #[arg(short, long, conflicts_with = "request")]
    pub input: Option<PathBuf>,

    /// Captured "Copy as fetch" request to replay against the portal
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}

enum Source {
    Stdin,
    File(PathBuf),
    Request(PathBuf),
}

impl SourceArgs {
    fn resolve(&self, config: &NuSchedConfig) -> Result<Source> {
        if let Some(input) = &self.input {
            if input.as_os_str() == "-" {
                return Ok(Source::Stdin);
            }
            return Ok(Source::File(input.clone()));
        }
        if let Some(request) = self.request.clone().or_else(|| config.request_file()) {
            return Ok(Source::Request(request));
        }
        bail!(
            "No schedule source given.\n\n\
            Pass a saved response with:\n  \
            nusched list --input schedule.json\n\n\
            or a captured request with:\n  \
            nusched list --request request.txt\n\n\
            or set request_file in the config file (see `nusched config`)."
        );
    }

    /// Load the decoded schedule payload from whichever source applies.
    pub async fn load_payload(&self, config: &NuSchedConfig) -> Result<Value> {
        match self.resolve(config)? {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read schedule JSON from stdin")?;
                serde_json::from_str(&text).context("stdin is not valid JSON")
            }
            Source::File(path) => read_payload_file(&path),
            Source::Request(path) => {
                let request = read_request_file(&path)?;
                fetch_with_spinner(&request).await
            }
        }
    }
}

pub fn read_payload_file(path: &Path) -> Result<Value> {
    debug!("Reading schedule payload from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

pub fn read_request_file(path: &Path) -> Result<CapturedRequest> {
    debug!("Reading captured request from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_captured_request(&text)
        .with_context(|| format!("Could not use the captured request in {}", path.display()))
}

pub async fn fetch_with_spinner(request: &CapturedRequest) -> Result<Value> {
    let spinner = create_spinner("Fetching schedule...");
    let result = client::fetch_schedule(request).await;
    spinner.finish_and_clear();
    result
}
