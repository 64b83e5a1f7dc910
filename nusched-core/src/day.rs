//! Weekday codes used in `BYDAY` recurrence rules.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Two-letter weekday code as used by `RRULE:...;BYDAY=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayCode {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl DayCode {
    /// Normalize a weekday label ("Monday", "tue", "TH", ...) to its code.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Only
    /// English full names and their two or three letter abbreviations are
    /// recognized; anything else yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let day = match label.trim().to_lowercase().as_str() {
            "sunday" | "sun" | "su" => DayCode::Su,
            "monday" | "mon" | "mo" => DayCode::Mo,
            "tuesday" | "tue" | "tu" => DayCode::Tu,
            "wednesday" | "wed" | "we" => DayCode::We,
            "thursday" | "thu" | "th" => DayCode::Th,
            "friday" | "fri" | "fr" => DayCode::Fr,
            "saturday" | "sat" | "sa" => DayCode::Sa,
            _ => return None,
        };
        Some(day)
    }

    pub fn as_ics_str(&self) -> &'static str {
        match self {
            DayCode::Mo => "MO",
            DayCode::Tu => "TU",
            DayCode::We => "WE",
            DayCode::Th => "TH",
            DayCode::Fr => "FR",
            DayCode::Sa => "SA",
            DayCode::Su => "SU",
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            DayCode::Mo => Weekday::Mon,
            DayCode::Tu => Weekday::Tue,
            DayCode::We => Weekday::Wed,
            DayCode::Th => Weekday::Thu,
            DayCode::Fr => Weekday::Fri,
            DayCode::Sa => Weekday::Sat,
            DayCode::Su => Weekday::Sun,
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ics_str())
    }
}
