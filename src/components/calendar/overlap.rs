//! The "in progress" predicate.
//!
//! All comparisons are on naive local instants. The date + time variants only
//! combine their arguments and delegate to [`in_progress`].

use crate::utils::time::combine;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// `start <= at <= end`, both boundaries inclusive.
///
/// An inverted span (`start > end`) contains no instant.
pub fn in_progress(start: &NaiveDateTime, end: &NaiveDateTime, at: &NaiveDateTime) -> bool {
    start <= at && at <= end
}

/// [`in_progress`] with the probe instant given as a separate date and time
pub fn in_progress_at(
    start: &NaiveDateTime,
    end: &NaiveDateTime,
    at_date: NaiveDate,
    at_time: NaiveTime,
) -> bool {
    in_progress(start, end, &combine(at_date, at_time))
}

/// [`in_progress`] with every instant given as a separate date and time
pub fn in_progress_parts(
    start: (NaiveDate, NaiveTime),
    end: (NaiveDate, NaiveTime),
    at: (NaiveDate, NaiveTime),
) -> bool {
    in_progress(
        &combine(start.0, start.1),
        &combine(end.0, end.1),
        &combine(at.0, at.1),
    )
}
