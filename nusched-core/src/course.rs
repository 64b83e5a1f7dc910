//! Course building: raw section records to canonical meeting records.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::day::DayCode;
use crate::resolve::{Record, first_value, text_or_empty};
use crate::time::parse_time;

const COURSE_NAME_KEYS: [&str; 4] = ["eventName", "courseName", "course_name", "name"];
const EVENT_ID_KEYS: [&str; 3] = ["eventId", "event_id", "id"];
const SUB_TYPE_KEYS: [&str; 3] = ["eventSubType", "eventSubtype", "subType"];
const SECTION_KEYS: [&str; 2] = ["section", "sectionId"];
const INSTRUCTOR_KEYS: [&str; 4] = ["instructors", "instructor", "instructorName", "instructorNames"];
const COURSE_BUILDING_KEYS: [&str; 4] = ["buildingName", "bldgName", "building", "orgName"];
const MEETING_BUILDING_KEYS: [&str; 4] = ["bldgName", "buildingName", "building", "orgName"];
const ROOM_KEYS: [&str; 2] = ["roomId", "room"];
const DAY_KEYS: [&str; 3] = ["dayDesc", "day", "dayName"];
const START_TIME_KEYS: [&str; 2] = ["startTime", "start_time"];
const END_TIME_KEYS: [&str; 2] = ["endTime", "end_time"];
const START_DATE_KEYS: [&str; 1] = ["startDate"];
const END_DATE_KEYS: [&str; 1] = ["endDate"];
const MEETING_LIST_KEYS: [&str; 5] = [
    "schedules",
    "scheduleTimePeriods",
    "scheduleList",
    "schedule",
    "timePeriods",
];

const FULL_NAME_KEY: &str = "fullName";
const NAME_PART_KEYS: [&str; 7] = [
    "firstName",
    "first",
    "middleName",
    "middle",
    "lastName",
    "last",
    "lastNamePrefix",
];

/// One weekly time slot of a course.
///
/// A course meeting on three weekdays produces three records that share the
/// course fields and differ in day and times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub course_name: String,
    pub event_id: String,
    pub event_sub_type: String,
    pub section: String,
    /// Instructor display names joined with ", ".
    pub instructors: String,
    /// Day label as found in the payload.
    pub day: String,
    pub day_code: Option<DayCode>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Original time text, shown when parsing failed.
    pub start_time_str: String,
    pub end_time_str: String,
    pub building: String,
    pub room: String,
    /// Original date bounds; the format varies and may be empty.
    pub start_date: String,
    pub end_date: String,
}

impl MeetingRecord {
    /// A recurring event needs both a weekday and a start time.
    pub fn is_exportable(&self) -> bool {
        self.day_code.is_some() && self.start_time.is_some()
    }

    /// Event title: "Algorithms - LEC", or just the course name.
    pub fn summary(&self) -> String {
        if self.event_sub_type.is_empty() {
            self.course_name.clone()
        } else {
            format!("{} - {}", self.course_name, self.event_sub_type)
        }
    }

    /// "Eng 201", or `None` when neither building nor room is known.
    pub fn location(&self) -> Option<String> {
        let location = format!("{} {}", self.building, self.room).trim().to_string();
        if location.is_empty() { None } else { Some(location) }
    }

    /// Time range for display, using the original text where parsing failed.
    pub fn display_time(&self) -> String {
        let start = display_clock(self.start_time, &self.start_time_str);
        let end = display_clock(self.end_time, &self.end_time_str);
        match (start.is_empty(), end.is_empty()) {
            (true, true) => String::new(),
            (false, true) => start,
            (true, false) => format!("? - {}", end),
            (false, false) => format!("{} - {}", start, end),
        }
    }
}

fn display_clock(time: Option<NaiveTime>, original: &str) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => original.to_string(),
    }
}

/// Build meeting records for every raw section, in payload order.
///
/// Sections carrying a nested meetings list produce one record per meeting;
/// other sections produce exactly one record from their own fields.
pub fn build_courses(sections: &[Record]) -> Vec<MeetingRecord> {
    sections.iter().flat_map(build_section).collect()
}

/// Fields shared by every meeting of a section.
struct CourseFields {
    course_name: String,
    event_id: String,
    event_sub_type: String,
    section: String,
    instructors: String,
    building: String,
    room: String,
    start_date: String,
    end_date: String,
}

impl CourseFields {
    fn resolve(rec: &Record) -> Self {
        CourseFields {
            course_name: text_or_empty(rec, &COURSE_NAME_KEYS),
            event_id: text_or_empty(rec, &EVENT_ID_KEYS),
            event_sub_type: text_or_empty(rec, &SUB_TYPE_KEYS),
            section: text_or_empty(rec, &SECTION_KEYS),
            instructors: resolve_instructors(rec),
            building: text_or_empty(rec, &COURSE_BUILDING_KEYS),
            room: text_or_empty(rec, &ROOM_KEYS),
            start_date: text_or_empty(rec, &START_DATE_KEYS),
            end_date: text_or_empty(rec, &END_DATE_KEYS),
        }
    }

    /// Meeting record for one slot, where the slot's own building and room
    /// override the course-level ones.
    fn meeting(&self, slot: &Record, building_keys: &[&str]) -> MeetingRecord {
        let day = text_or_empty(slot, &DAY_KEYS);
        let start_time_str = text_or_empty(slot, &START_TIME_KEYS).trim().to_string();
        let end_time_str = text_or_empty(slot, &END_TIME_KEYS).trim().to_string();

        let building = first_non_empty(text_or_empty(slot, building_keys), &self.building);
        let room = first_non_empty(text_or_empty(slot, &ROOM_KEYS), &self.room);

        MeetingRecord {
            course_name: self.course_name.clone(),
            event_id: self.event_id.clone(),
            event_sub_type: self.event_sub_type.clone(),
            section: self.section.clone(),
            instructors: self.instructors.clone(),
            day_code: DayCode::from_label(&day),
            day,
            start_time: parse_time(&start_time_str),
            end_time: parse_time(&end_time_str),
            start_time_str,
            end_time_str,
            building,
            room,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

fn build_section(rec: &Record) -> Vec<MeetingRecord> {
    let course = CourseFields::resolve(rec);

    match nested_meetings(rec) {
        Some(meetings) => meetings
            .into_iter()
            .map(|meeting| course.meeting(meeting, &MEETING_BUILDING_KEYS))
            .collect(),
        None => vec![course.meeting(rec, &COURSE_BUILDING_KEYS)],
    }
}

/// The per-meeting entries of a section, if it has any.
fn nested_meetings(rec: &Record) -> Option<Vec<&Record>> {
    let meetings: Vec<&Record> = first_value(rec, &MEETING_LIST_KEYS)?
        .as_array()?
        .iter()
        .filter_map(Value::as_object)
        .collect();

    if meetings.is_empty() { None } else { Some(meetings) }
}

fn first_non_empty(own: String, inherited: &str) -> String {
    if own.is_empty() { inherited.to_string() } else { own }
}

fn resolve_instructors(rec: &Record) -> String {
    let names: Vec<String> = match first_value(rec, &INSTRUCTOR_KEYS) {
        Some(Value::Array(items)) => items.iter().map(instructor_name).collect(),
        Some(value) => vec![instructor_name(value)],
        None => Vec::new(),
    };

    names
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display name of one instructor entry (a plain string or a name object).
fn instructor_name(value: &Value) -> String {
    match value {
        Value::String(name) => name.trim().to_string(),
        Value::Object(person) => {
            let full = person
                .get(FULL_NAME_KEY)
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default();
            if !full.is_empty() {
                return full.to_string();
            }

            NAME_PART_KEYS
                .iter()
                .filter_map(|key| person.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        }
        _ => String::new(),
    }
}
