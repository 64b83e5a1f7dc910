//! ICS file generation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use uuid::Uuid;

use super::CalendarMetadata;
use crate::bounds::SemesterBounds;
use crate::course::MeetingRecord;
use crate::dates::parse_date;
use crate::day::DayCode;

/// Generate a calendar with one weekly recurring event per exportable record.
///
/// Records without a weekday or a start time are skipped. `dtstamp` is
/// written to every event so that one export carries one timestamp; apart
/// from the random UIDs the output is fully determined by the arguments.
pub fn generate_ics(
    records: &[MeetingRecord],
    bounds: &SemesterBounds,
    metadata: &CalendarMetadata,
    dtstamp: DateTime<Utc>,
) -> String {
    let dtstamp = dtstamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.name(&normalize_newlines(&metadata.calendar_name));
    cal.timezone(metadata.timezone.as_str());

    for record in records {
        let (Some(day_code), Some(start_time)) = (record.day_code, record.start_time) else {
            continue;
        };
        cal.push(build_event(record, day_code, start_time, bounds, metadata, &dtstamp));
    }

    let mut cal = cal.done();
    tidy_envelope(&mut cal, metadata);
    cal.to_string()
}

/// Adjust the envelope the icalendar crate produces
/// - Replace its PRODID with ours
/// - Drop the RFC 7986 NAME it adds next to X-WR-CALNAME
fn tidy_envelope(cal: &mut Calendar, metadata: &CalendarMetadata) {
    cal.properties.retain(|p| p.key() != "NAME");
    for property in cal.properties.iter_mut() {
        if property.key() == "PRODID" {
            *property = Property::new("PRODID", metadata.product_id.as_str());
        }
    }
}

fn build_event(
    record: &MeetingRecord,
    day_code: DayCode,
    start_time: NaiveTime,
    bounds: &SemesterBounds,
    metadata: &CalendarMetadata,
    dtstamp: &str,
) -> icalendar::Event {
    let first_date = first_occurrence(bounds.anchor, day_code);

    // A record's own end date beats the semester default
    let until = parse_date(&record.end_date)
        .map(|d| d.format("%Y%m%d").to_string())
        .unwrap_or_else(|| bounds.until_stamp());

    let dtstart = local_stamp(first_date, start_time);
    let dtend = record
        .end_time
        .map(|end| local_stamp(first_date, end))
        .unwrap_or_else(|| dtstart.clone());

    let mut event = icalendar::Event::new();
    event.uid(&generate_uid(&metadata.uid_domain));
    event.add_property("DTSTAMP", dtstamp);
    event.add_property("DTSTART", &dtstart);
    event.add_property("DTEND", &dtend);
    event.add_property(
        "RRULE",
        format!("FREQ=WEEKLY;BYDAY={};UNTIL={}T000000Z", day_code, until),
    );
    event.summary(&normalize_newlines(&record.summary()));

    if !record.instructors.is_empty() {
        event.description(&format!(
            "Instructor(s): {}",
            normalize_newlines(&record.instructors)
        ));
    }

    if let Some(location) = record.location() {
        event.location(&normalize_newlines(&location));
    }

    event.done()
}

/// Earliest date on or after `anchor` that falls on `day`.
fn first_occurrence(anchor: NaiveDate, day: DayCode) -> NaiveDate {
    let from = anchor.weekday().num_days_from_monday();
    let to = day.weekday().num_days_from_monday();
    anchor + Duration::days(i64::from((to + 7 - from) % 7))
}

/// Floating local date-time, e.g. `20260209T100000`.
fn local_stamp(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format("%Y%m%dT%H%M%S").to_string()
}

fn generate_uid(domain: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}@{}", &id[..8], &id[8..16], domain)
}

/// CRLF and bare CR become LF, which the icalendar crate escapes as `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
