//! Read-back of generated calendars using the icalendar crate's parser.
//!
//! Used to check an export before it is written, and to confirm that what we
//! emit reads back to the values we started from.

use icalendar::parser::{Component, read_calendar, unfold};
use log::debug;

use crate::error::{NuSchedError, NuSchedResult};

/// The properties of one exported `VEVENT`. The parser has already
/// unescaped TEXT values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub dtstart: String,
    pub dtend: String,
    pub rrule: String,
}

/// Parse every `VEVENT` of an .ics document.
///
/// Fails if the document does not parse or an event lacks one of the
/// properties every exported class carries (UID, DTSTART, DTEND, RRULE).
pub fn parse_events(content: &str) -> NuSchedResult<Vec<ExportedEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| NuSchedError::IcsVerify(e.to_string()))?;

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(to_exported_event)
        .collect()
}

/// Check that `content` reads back as a calendar of well-formed exported
/// events and return how many events it holds.
pub fn verify(content: &str) -> NuSchedResult<usize> {
    let events = parse_events(content)?;
    debug!("Verified calendar with {} events", events.len());
    Ok(events.len())
}

fn to_exported_event(vevent: &Component<'_>) -> NuSchedResult<ExportedEvent> {
    let value = |name: &str| vevent.find_prop(name).map(|p| p.val.to_string());
    let required = |name: &str| {
        value(name).ok_or_else(|| NuSchedError::IcsVerify(format!("VEVENT without {}", name)))
    };

    Ok(ExportedEvent {
        uid: required("UID")?,
        summary: value("SUMMARY").unwrap_or_default(),
        description: value("DESCRIPTION"),
        location: value("LOCATION"),
        dtstart: required("DTSTART")?,
        dtend: required("DTEND")?,
        rrule: required("RRULE")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::SemesterBounds;
    use crate::course::MeetingRecord;
    use crate::day::DayCode;
    use crate::ics::{CalendarMetadata, generate_ics};
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn record(instructors: &str, building: &str) -> MeetingRecord {
        MeetingRecord {
            course_name: "Data Structures".to_string(),
            event_id: String::new(),
            event_sub_type: "LAB".to_string(),
            section: "2".to_string(),
            instructors: instructors.to_string(),
            day: "Thursday".to_string(),
            day_code: Some(DayCode::Th),
            start_time: NaiveTime::from_hms_opt(14, 0, 0),
            end_time: NaiveTime::from_hms_opt(15, 30, 0),
            start_time_str: "2:00 PM".to_string(),
            end_time_str: "3:30 PM".to_string(),
            building: building.to_string(),
            room: "B1".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    fn export(records: &[MeetingRecord]) -> String {
        let bounds = SemesterBounds {
            anchor: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
            until: NaiveDate::from_ymd_opt(2026, 5, 21).unwrap(),
        };
        let stamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        generate_ics(records, &bounds, &CalendarMetadata::default(), stamp)
    }

    #[test]
    fn test_escaped_text_reads_back_unchanged() {
        let instructors = r"Smith, John; O\Neil";
        let ics = export(&[record(instructors, "Hall; East, Wing")]);
        assert!(
            ics.contains(r"DESCRIPTION:Instructor(s): Smith\, John\; O\\Neil"),
            "ICS:\n{}",
            ics
        );

        let events = parse_events(&ics).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].description.as_deref(),
            Some(r"Instructor(s): Smith, John; O\Neil")
        );
        assert_eq!(events[0].location.as_deref(), Some("Hall; East, Wing B1"));
        assert_eq!(events[0].summary, "Data Structures - LAB");
        assert_eq!(events[0].dtstart, "20260212T140000");
        assert_eq!(events[0].dtend, "20260212T153000");
        assert_eq!(events[0].rrule, "FREQ=WEEKLY;BYDAY=TH;UNTIL=20260521T000000Z");
    }

    #[test]
    fn test_backslash_sequences_read_back_unchanged() {
        // Backslashes followed by n, N or a comma must not be decoded twice.
        let instructors = r"C:\new\Name, Lee\,Kim \\N";
        let ics = export(&[record(instructors, r"Annex\n")]);

        let events = parse_events(&ics).unwrap();
        assert_eq!(
            events[0].description.as_deref(),
            Some(format!("Instructor(s): {}", instructors).as_str())
        );
        assert_eq!(events[0].location.as_deref(), Some(r"Annex\n B1"));
    }

    #[test]
    fn test_folded_lines_read_back_whole() {
        let many = (1..=12)
            .map(|i| format!("Instructor Number {}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let ics = export(&[record(&many, "")]);
        assert!(ics.contains("\r\n "), "Expected a folded line. ICS:\n{}", ics);

        let events = parse_events(&ics).unwrap();
        assert_eq!(
            events[0].description.as_deref(),
            Some(format!("Instructor(s): {}", many).as_str())
        );
    }

    #[test]
    fn test_counts_every_event() {
        let ics = export(&[record("A", "X"), record("B", "Y"), record("C", "Z")]);
        let events = parse_events(&ics).unwrap();
        assert_eq!(events.len(), 3);
        let uids: std::collections::HashSet<_> = events.iter().map(|e| e.uid.clone()).collect();
        assert_eq!(uids.len(), 3, "UIDs should be unique");
    }

    #[test]
    fn test_event_without_rrule_is_rejected() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//x//EN\r\n\
                   BEGIN:VEVENT\r\nUID:1\r\nDTSTAMP:20260101T000000Z\r\n\
                   DTSTART:20260101T100000\r\nDTEND:20260101T110000\r\nEND:VEVENT\r\n\
                   END:VCALENDAR\r\n";
        assert!(parse_events(ics).is_err());
    }
}
