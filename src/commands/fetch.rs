use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::source::{fetch_with_spinner, read_request_file};

/// Replay the captured request and save the decoded response, so the API
/// shape can be inspected or the payload reused with `--input`.
pub async fn run(request_path: &Path, output: Option<&Path>) -> Result<()> {
    let request = read_request_file(request_path)?;
    let payload = fetch_with_spinner(&request).await?;
    let pretty = serde_json::to_string_pretty(&payload)?;

    match output {
        Some(path) => {
            let path = nusched_core::export::write_atomic(path, &pretty)
                .with_context(|| format!("Failed to save response to {}", path.display()))?;
            println!("{} {}", "Saved response to".green(), path.display());
        }
        None => println!("{}", pretty),
    }

    Ok(())
}
