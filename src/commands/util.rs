use chrono::{Local, NaiveDate, NaiveDateTime};
use kalenteri::components::calendar::EventRecord;
use kalenteri::error::Error;
use kalenteri::utils::time::{self, CANONICAL_FORMAT};

/// Date argument as `YYYY-MM-DD`, today when absent
pub fn date_arg(date: Option<&str>) -> miette::Result<NaiveDate> {
    match date {
        None => Ok(Local::now().date_naive()),
        Some(s) => time::parse_date(s).ok_or_else(|| {
            Error::Other(format!("Invalid date '{}'. Expected YYYY-MM-DD", s)).into()
        }),
    }
}

/// Instant argument in either time encoding, now when absent
pub fn instant_arg(at: Option<&str>) -> miette::Result<NaiveDateTime> {
    match at {
        None => Ok(Local::now().naive_local()),
        Some(s) => time::parse(s).instant().ok_or_else(|| {
            Error::Other(format!("Invalid time '{}'. Expected MM/dd/yyyy HH:mm:ss", s)).into()
        }),
    }
}

/// One listing line for an event
pub fn event_line(event: &EventRecord) -> String {
    let id = event
        .id()
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "-".to_string());
    format!("{:>5}  {}  {} - {}", id, event.name(), event.start(), event.end())
}

/// Heading line for a slot
pub fn slot_label(start: &NaiveDateTime) -> String {
    start.format(CANONICAL_FORMAT).to_string()
}
