//! Schedule normalization and calendar export for nusched.
//!
//! The pipeline runs leaf-first:
//! - `extract` turns a (possibly double-encoded) portal response into raw
//!   section records
//! - `course` builds one `MeetingRecord` per weekly time slot, using the
//!   `time` and `day` normalizers
//! - `bounds` derives the recurrence anchor and default end date
//! - `ics` emits the recurring-event calendar, `export` writes it to disk

pub mod bounds;
pub mod config;
pub mod constants;
pub mod course;
pub mod dates;
pub mod day;
pub mod error;
pub mod export;
pub mod extract;
pub mod ics;
pub mod resolve;
pub mod time;

pub use bounds::SemesterBounds;
pub use course::{MeetingRecord, build_courses};
pub use day::DayCode;
pub use error::{NuSchedError, NuSchedResult};

use log::debug;
use serde_json::Value;

/// Turn a decoded schedule response into meeting records, in payload order.
///
/// Never fails: payloads that cannot be understood produce an empty list.
pub fn parse_schedule(payload: Value) -> Vec<MeetingRecord> {
    let payload = extract::unwrap_payload(payload);
    let sections = extract::extract_sections(&payload);
    let records = build_courses(&sections);
    debug!(
        "Built {} meeting records from {} sections",
        records.len(),
        sections.len()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::{CalendarMetadata, generate_ics, parse_events};
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use serde_json::json;

    const ALGORITHMS_PAYLOAD: &str = r#"{"data":{"schedule":[{"sections":[[],[],[],[{"eventName":"Algorithms","eventSubType":"LEC","section":"1","instructors":[{"firstName":"A","lastName":"Smith"}],"isRegistered":true,"schedules":[{"dayDesc":"Monday","startTime":"10:00 AM","endTime":"11:30 AM","roomId":"201","bldgName":"Eng"}],"startDate":"2/8/2026","endDate":"5/21/2026"}]]}]}}"#;

    fn fallback() -> SemesterBounds {
        SemesterBounds {
            anchor: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
            until: NaiveDate::from_ymd_opt(2026, 5, 21).unwrap(),
        }
    }

    fn export(records: &[MeetingRecord]) -> String {
        let bounds = SemesterBounds::derive(records, fallback());
        let stamp = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        generate_ics(records, &bounds, &CalendarMetadata::default(), stamp)
    }

    #[test]
    fn test_algorithms_payload_end_to_end() {
        let payload: Value = serde_json::from_str(ALGORITHMS_PAYLOAD).unwrap();
        let records = parse_schedule(payload);

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.course_name, "Algorithms");
        assert_eq!(rec.day_code, Some(DayCode::Mo));
        assert_eq!(rec.start_time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(rec.end_time, NaiveTime::from_hms_opt(11, 30, 0));
        assert_eq!(rec.instructors, "A Smith");
        assert_eq!(rec.location().as_deref(), Some("Eng 201"));

        let ics = export(&records);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1, "ICS:\n{}", ics);
        assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO;UNTIL=20260521T000000Z\r\n"));
        assert!(ics.contains("DTSTART:20260209T100000\r\n"));
        assert!(ics.contains("DTEND:20260209T113000\r\n"));

        let events = parse_events(&ics).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Algorithms - LEC");
        assert_eq!(events[0].description.as_deref(), Some("Instructor(s): A Smith"));
    }

    #[test]
    fn test_double_encoded_response_end_to_end() {
        let payload = Value::String(ALGORITHMS_PAYLOAD.to_string());
        let records = parse_schedule(payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day_code, Some(DayCode::Mo));
    }

    #[test]
    fn test_unrecognized_day_is_listed_but_not_exported() {
        let payload = json!({
            "data": {"schedule": [{"sections": [[{
                "eventName": "Graduation Project",
                "isRegistered": true,
                "schedules": [{"dayDesc": "N/A", "startTime": "10:00 AM", "endTime": "12:00 PM"}]
            }]]}]}
        });
        let records = parse_schedule(payload);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, "N/A");
        assert!(!records[0].is_exportable());

        let ics = export(&records);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0, "ICS:\n{}", ics);
    }

    #[test]
    fn test_multi_day_course_yields_one_event_per_day() {
        let payload = json!({
            "data": {"schedule": [{"sections": [[{
                "eventName": "Operating Systems",
                "eventSubType": "LEC",
                "startDate": "2026-02-10",
                "endDate": "2026-05-28",
                "schedules": [
                    {"dayDesc": "Tuesday", "startTime": "8:30 AM", "endTime": "10:00 AM"},
                    {"dayDesc": "Thursday", "startTime": "8:30 AM", "endTime": "10:00 AM"}
                ]
            }]]}]}
        });
        let records = parse_schedule(payload);
        assert_eq!(records.len(), 2);

        let ics = export(&records);
        assert!(ics.contains("DTSTART:20260210T083000\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART:20260212T083000\r\n"), "ICS:\n{}", ics);
        assert_eq!(ics.matches("UNTIL=20260528T000000Z").count(), 2);
    }

    #[test]
    fn test_garbage_payload_yields_no_records() {
        assert!(parse_schedule(json!({"code": 500, "message": "error"})).is_empty());
        assert!(parse_schedule(json!("<html>login</html>")).is_empty());
    }
}
