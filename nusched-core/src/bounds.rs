//! Semester bounds estimation.
//!
//! Weekly events need an anchor date on or before the first class of the
//! term and an `UNTIL` date. Both are derived from the records' own date
//! bounds, with configured fallbacks when nothing parses.

use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};

use crate::course::MeetingRecord;
use crate::dates::parse_date;

/// Recurrence anchor and default end for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterBounds {
    /// Sunday on or before the earliest start date.
    pub anchor: NaiveDate,
    /// Latest end date; used for records without their own end date.
    pub until: NaiveDate,
}

impl SemesterBounds {
    /// Derive bounds from `records`, using `fallback` for each side that has
    /// no parseable date.
    pub fn derive(records: &[MeetingRecord], fallback: SemesterBounds) -> Self {
        let earliest = records
            .iter()
            .filter_map(|r| parse_date(&r.start_date))
            .min();
        let latest = records.iter().filter_map(|r| parse_date(&r.end_date)).max();

        let anchor = match earliest {
            Some(date) => week_start(date),
            None => {
                warn!("No parseable start dates; anchoring at {}", fallback.anchor);
                fallback.anchor
            }
        };

        let until = latest.unwrap_or_else(|| {
            warn!("No parseable end dates; recurring until {}", fallback.until);
            fallback.until
        });

        debug!("Semester bounds: anchor {}, until {}", anchor, until);
        SemesterBounds { anchor, until }
    }

    /// `UNTIL` stamp in `YYYYMMDD` form.
    pub fn until_stamp(&self) -> String {
        self.until.format("%Y%m%d").to_string()
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fallback() -> SemesterBounds {
        SemesterBounds {
            anchor: ymd(2026, 2, 8),
            until: ymd(2026, 5, 21),
        }
    }

    fn record(start: &str, end: &str) -> MeetingRecord {
        MeetingRecord {
            course_name: "Course".to_string(),
            event_id: String::new(),
            event_sub_type: String::new(),
            section: String::new(),
            instructors: String::new(),
            day: String::new(),
            day_code: None,
            start_time: None,
            end_time: None,
            start_time_str: String::new(),
            end_time_str: String::new(),
            building: String::new(),
            room: String::new(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_anchor_is_sunday_before_earliest_start() {
        let orders = [
            vec![record("3/10/2026", ""), record("2/15/2026", "")],
            vec![record("2/15/2026", ""), record("3/10/2026", "")],
        ];
        for records in orders {
            let bounds = SemesterBounds::derive(&records, fallback());
            // 2026-02-15 is itself a Sunday.
            assert_eq!(bounds.anchor, ymd(2026, 2, 15));
            assert_eq!(bounds.anchor.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_anchor_rolls_back_mid_week() {
        // Wednesday 2026-02-11 rolls back to Sunday 2026-02-08.
        let bounds = SemesterBounds::derive(&[record("2026-02-11", "")], fallback());
        assert_eq!(bounds.anchor, ymd(2026, 2, 8));
        // Saturday rolls back six days.
        assert_eq!(week_start(ymd(2026, 2, 14)), ymd(2026, 2, 8));
    }

    #[test]
    fn test_until_is_latest_end_date_across_formats() {
        let records = [
            record("", "5/21/2026"),
            record("", "2026-06-02"),
            record("", "garbage"),
        ];
        let bounds = SemesterBounds::derive(&records, fallback());
        assert_eq!(bounds.until, ymd(2026, 6, 2));
        assert_eq!(bounds.until_stamp(), "20260602");
    }

    #[test]
    fn test_each_side_falls_back_independently() {
        let bounds = SemesterBounds::derive(&[record("9/3/2026", "")], fallback());
        assert_eq!(bounds.anchor, ymd(2026, 8, 30));
        assert_eq!(bounds.until, ymd(2026, 5, 21));

        let bounds = SemesterBounds::derive(&[record("TBA", "12/24/2026")], fallback());
        assert_eq!(bounds.anchor, ymd(2026, 2, 8));
        assert_eq!(bounds.until, ymd(2026, 12, 24));
    }

    #[test]
    fn test_two_digit_years_do_not_move_bounds() {
        let records = [record("2/8/26", "5/21/26"), record("2/22/2026", "")];
        let bounds = SemesterBounds::derive(&records, fallback());
        assert_eq!(bounds.anchor, ymd(2026, 2, 22));
        assert_eq!(bounds.until, ymd(2026, 5, 21));
    }

    #[test]
    fn test_no_records_uses_fallback() {
        assert_eq!(SemesterBounds::derive(&[], fallback()), fallback());
    }
}
