//! Conversion between the textual time encodings and chrono values.
//!
//! Stored and displayed times use the canonical `MM/dd/yyyy HH:mm:ss` form.
//! Imported sources supply the compact basic form `yyyyMMddTHHmmss`, which is
//! shifted forward by a fixed [`BASIC_OFFSET_HOURS`] before being re-emitted.
//! Anything else degrades to [`INVALID_DATE`] instead of raising an error.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// chrono format of the canonical time string
pub const CANONICAL_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// chrono format of the basic encoding used by imported sources
pub const BASIC_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Fixed correction applied to basic-encoded times
pub const BASIC_OFFSET_HOURS: i64 = 10;

/// Sentinel emitted for unparseable input
pub const INVALID_DATE: &str = "Invalid Date";

/// Result of parsing a raw time string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTime {
    Valid(NaiveDateTime),
    Invalid,
}

impl RawTime {
    /// The parsed instant, or `None` for the invalid sentinel
    pub fn instant(self) -> Option<NaiveDateTime> {
        match self {
            RawTime::Valid(dt) => Some(dt),
            RawTime::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, RawTime::Valid(_))
    }
}

impl fmt::Display for RawTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTime::Valid(dt) => write!(f, "{}", dt.format(CANONICAL_FORMAT)),
            RawTime::Invalid => f.write_str(INVALID_DATE),
        }
    }
}

/// Parse a raw time string, trying the canonical encoding first and the
/// basic encoding second.
///
/// Single-digit fields are accepted (`9/5/2021 8:00:00`); leap seconds are not.
pub fn parse(raw: &str) -> RawTime {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, CANONICAL_FORMAT) {
        return checked(dt);
    }

    NaiveDateTime::parse_from_str(raw, BASIC_FORMAT)
        .ok()
        .filter(|dt| !is_leap_second(dt))
        .and_then(|dt| dt.checked_add_signed(Duration::hours(BASIC_OFFSET_HOURS)))
        .map_or(RawTime::Invalid, RawTime::Valid)
}

fn checked(dt: NaiveDateTime) -> RawTime {
    if is_leap_second(&dt) {
        RawTime::Invalid
    } else {
        RawTime::Valid(dt)
    }
}

// chrono represents `:60` as a nanosecond overflow into the next second
fn is_leap_second(dt: &NaiveDateTime) -> bool {
    dt.nanosecond() >= 1_000_000_000
}

/// Format an instant in the canonical encoding
pub fn format(dt: &NaiveDateTime) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}

/// Parse then re-emit a raw string: canonical input is returned unchanged,
/// basic input is shifted and converted, anything else becomes the sentinel.
pub fn normalize(raw: &str) -> String {
    parse(raw).to_string()
}

/// Join a calendar date and a time of day into one instant
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Drop the time of day
pub fn truncate_to_day(dt: &NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

/// Drop minutes, seconds and fractions
pub fn truncate_to_hour(dt: &NaiveDateTime) -> NaiveDateTime {
    let hour = NaiveTime::from_hms_opt(dt.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
    dt.date().and_time(hour)
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(
        date.weekday().num_days_from_monday() as i64,
    ))
    .unwrap_or(date)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// January 1st of the year containing `date`
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Parse a `YYYY-MM-DD` date as typed on the command line
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
