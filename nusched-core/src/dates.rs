//! Per-record date bounds as they appear in schedule payloads.

use chrono::NaiveDate;

use crate::constants::DATE_FORMATS;

/// Parse a record's start/end date.
///
/// Formats are tried in order (`M/D/YYYY`, `YYYY-MM-DD`, `D/M/YYYY`,
/// `YYYY/MM/DD`) and the first that parses wins, so an ambiguous `3/4/2026`
/// is read as March 4th. The year must have four digits: `2/8/26` does
/// not parse.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .filter(|fmt| has_full_year(text, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// chrono's `%Y` takes one to four digits; only four are accepted here.
fn has_full_year(text: &str, fmt: &str) -> bool {
    let mut parts = text.split(['/', '-']);
    let year = if fmt.starts_with("%Y") {
        parts.next()
    } else {
        parts.last()
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}
