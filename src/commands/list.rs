use anyhow::Result;
use nusched_core::MeetingRecord;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_records};

pub fn run(records: &[MeetingRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No classes found in the schedule".dimmed());
        return Ok(());
    }

    for line in render_records(records) {
        println!("{}", line);
    }

    let skipped = records.iter().filter(|r| !r.is_exportable()).count();
    println!();
    println!(
        "{} {}",
        records.len(),
        pluralize("class", records.len()).dimmed()
    );
    if skipped > 0 {
        println!(
            "{}",
            format!(
                "{} without a day or start time will be skipped on export",
                skipped
            )
            .yellow()
        );
    }

    Ok(())
}
