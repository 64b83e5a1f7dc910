use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use nusched_core::config::NuSchedConfig;
use nusched_core::{MeetingRecord, SemesterBounds, export, ics};
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::selection::Selection;

/// Options of one `nusched export` run, on top of the loaded records.
pub struct ExportOptions {
    pub output: Option<PathBuf>,
    pub only: Vec<usize>,
    pub exclude: Vec<usize>,
    pub start: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

pub fn run(records: &[MeetingRecord], options: ExportOptions, config: &NuSchedConfig) -> Result<()> {
    if records.is_empty() {
        bail!("No classes found in the schedule; nothing to export.");
    }

    let selection = Selection::from_args(&options.only, &options.exclude, records.len())?;
    if selection.is_empty() {
        bail!("No classes left to export; check --only and --exclude.");
    }
    let selected = selection.apply(records);
    let exportable = selected.iter().filter(|r| r.is_exportable()).count();
    if exportable == 0 {
        bail!(
            "None of the {} selected {} has a day and start time to export.",
            selected.len(),
            pluralize("class", selected.len())
        );
    }

    let bounds = export_bounds(records, &options, config);
    let content = ics::generate_ics(&selected, &bounds, &config.metadata(), Utc::now());
    let count = ics::verify(&content).context("Generated calendar failed to read back")?;

    let output = options.output.unwrap_or_else(|| config.output_path());
    let path = export::write_atomic(&output, &content)?;

    println!(
        "{} {} {} to {}",
        "Exported".green(),
        count,
        pluralize("event", count),
        path.display()
    );
    let skipped = selected.len() - exportable;
    if skipped > 0 {
        println!(
            "{}",
            format!("Skipped {} without a day or start time", skipped).yellow()
        );
    }
    println!();
    println!("{}", "To import:".bold());
    println!("  Google Calendar: Settings → Import & export → Import, choose the file");
    println!("  Apple Calendar:  File → Import…, choose the file");
    println!("  Outlook:         Add calendar → Upload from file");

    Ok(())
}

/// Bounds come from every record's dates, not just the selected ones, so
/// excluding a class never moves the anchor week.
fn export_bounds(records: &[MeetingRecord], options: &ExportOptions, config: &NuSchedConfig) -> SemesterBounds {
    let mut fallback = config.fallback_bounds();
    if let Some(until) = options.until {
        fallback.until = until;
    }

    let mut bounds = SemesterBounds::derive(records, fallback);
    if let Some(start) = options.start {
        bounds.anchor = start;
    }
    bounds
}
