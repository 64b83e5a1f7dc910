//! Terminal rendering of meeting records.
//!
//! Extension traits that add colored output to nusched-core types using
//! owo_colors.

use nusched_core::MeetingRecord;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MeetingRecord {
    fn render(&self) -> String {
        let kind = if self.event_sub_type.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.event_sub_type)
        };
        let section = if self.section.is_empty() {
            String::new()
        } else {
            format!(" §{}", self.section)
        };
        let when = format!("{} {}", day_label(self), self.display_time());
        let location = self.location().unwrap_or_default();

        if !self.is_exportable() {
            let line = format!("{}{}{} {} {}", self.course_name, kind, section, when.trim(), location);
            return format!("{} {}", line.trim_end().dimmed(), "(not exportable)".red());
        }

        let mut line = format!(
            "{}{}{}  {}",
            self.course_name.bold(),
            kind,
            section.dimmed(),
            when.trim().cyan()
        );
        if !location.is_empty() {
            line.push_str(&format!("  {}", location));
        }
        if !self.instructors.is_empty() {
            line.push_str(&format!("  {}", self.instructors.dimmed()));
        }
        line
    }
}

fn day_label(record: &MeetingRecord) -> String {
    match record.day_code {
        Some(code) => code.to_string(),
        None if record.day.is_empty() => "?".to_string(),
        None => record.day.clone(),
    }
}

/// Numbered list of records, as `--only`/`--exclude` refer to them.
pub fn render_records(records: &[MeetingRecord]) -> Vec<String> {
    let width = records.len().to_string().len();
    records
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>width$}. {}", i + 1, record.render(), width = width))
        .collect()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "class" => "classes",
            "record" => "records",
            _ => word,
        }
    }
}
