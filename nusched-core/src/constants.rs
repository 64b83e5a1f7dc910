//! Built-in defaults.

/// File the calendar is exported to when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "schedule_export.ics";

pub const DEFAULT_CALENDAR_NAME: &str = "NU Schedule";

/// Only emitted as the `X-WR-TIMEZONE` hint; event times stay floating.
pub const DEFAULT_TIMEZONE: &str = "Africa/Cairo";

pub const DEFAULT_PRODUCT_ID: &str = "-//NUSched//Schedule Export//EN";

/// Right-hand side of generated UIDs (`xxxxxxxx-xxxxxxxx@nusched`).
pub const DEFAULT_UID_DOMAIN: &str = "nusched";

/// Recurrence anchor used when no record carries a parseable start date.
pub const FALLBACK_START: (i32, u32, u32) = (2026, 2, 8);

/// Recurrence end used when no record carries a parseable end date.
pub const FALLBACK_UNTIL: (i32, u32, u32) = (2026, 5, 21);

/// Date formats tried in order when reading a record's start/end date.
pub const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
