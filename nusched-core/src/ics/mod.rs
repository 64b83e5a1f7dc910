//! ICS generation and read-back.
//!
//! Generated calendars follow RFC 5545: CRLF line endings, escaped TEXT
//! values and content lines folded at 75 octets.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::{ExportedEvent, parse_events, verify};

/// Calendar-level metadata written into the `VCALENDAR` envelope.
#[derive(Debug, Clone)]
pub struct CalendarMetadata {
    /// `X-WR-CALNAME`, the name calendar apps show for the import
    pub calendar_name: String,
    /// `X-WR-TIMEZONE` hint
    pub timezone: String,
    /// `PRODID`
    pub product_id: String,
    /// Domain part of generated UIDs
    pub uid_domain: String,
}

impl Default for CalendarMetadata {
    fn default() -> Self {
        use crate::constants::*;
        CalendarMetadata {
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
        }
    }
}
