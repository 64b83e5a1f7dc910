//! Clock time parsing for schedule strings.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s*(?i:(am|pm))").unwrap());

static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})").unwrap());

/// Parse a schedule time such as `"2:30 PM"`, `"02:30pm"` or `"14:30"`.
///
/// 12-hour input is converted to 24-hour time (`12:00 AM` is midnight,
/// `12:00 PM` is noon). Input without a marker is read as 24-hour time.
/// Returns `None` when nothing usable is found; callers keep the original
/// text for display.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();

    if let Some(caps) = TWELVE_HOUR.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = caps[3].eq_ignore_ascii_case("pm");
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        return NaiveTime::from_hms_opt(hour, minute, 0);
    }

    let caps = TWENTY_FOUR_HOUR.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
