use crate::utils::time::{self, month_start, week_start, year_start};
use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity used when matching events to slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Day,
    Hour,
}

impl TimeUnit {
    /// Drop every component smaller than this unit
    pub fn truncate(self, instant: &NaiveDateTime) -> NaiveDateTime {
        match self {
            TimeUnit::Day => time::truncate_to_day(instant),
            TimeUnit::Hour => time::truncate_to_hour(instant),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeUnit::Day),
            "hour" => Ok(TimeUnit::Hour),
            other => Err(format!("Unknown unit '{}'. Expected day or hour", other)),
        }
    }
}

/// Length of a query window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl Period {
    /// First date after a window of this length starting at `anchor`
    pub fn end_from(self, anchor: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Days(n) => anchor.checked_add_days(Days::new(u64::from(n))),
            Period::Weeks(n) => anchor.checked_add_days(Days::new(u64::from(n) * 7)),
            Period::Months(n) => anchor.checked_add_months(Months::new(n)),
        }
    }
}

/// The calendar range an engine answers for: `[anchor, anchor + period)`.
/// Without a period the window is open-ended forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    anchor: NaiveDate,
    period: Option<Period>,
    unit: TimeUnit,
}

impl Window {
    pub fn new(anchor: NaiveDate, period: Period, unit: TimeUnit) -> Self {
        Self {
            anchor,
            period: Some(period),
            unit,
        }
    }

    /// Window from `anchor` with no end
    pub fn unbounded(anchor: NaiveDate, unit: TimeUnit) -> Self {
        Self {
            anchor,
            period: None,
            unit,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn period(&self) -> Option<Period> {
        self.period
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Exclusive end date, `None` when the window is open-ended
    pub fn end(&self) -> Option<NaiveDate> {
        self.period.and_then(|p| p.end_from(self.anchor))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.anchor && self.end().map_or(true, |end| date < end)
    }

    /// Every date inside the window; empty for an open-ended window
    pub fn days(&self) -> Vec<NaiveDate> {
        let Some(end) = self.end() else {
            return Vec::new();
        };

        self.anchor.iter_days().take_while(|d| *d < end).collect()
    }

    /// Start instant of every slot of `unit` length inside the window
    pub fn slots(&self) -> Vec<NaiveDateTime> {
        let days = self.days();
        match self.unit {
            TimeUnit::Day => days
                .into_iter()
                .map(|d| time::combine(d, NaiveTime::MIN))
                .collect(),
            TimeUnit::Hour => days
                .into_iter()
                .flat_map(|d| {
                    (0..24).filter_map(move |h| NaiveTime::from_hms_opt(h, 0, 0).map(|t| time::combine(d, t)))
                })
                .collect(),
        }
    }
}

/// The calendar views and the window each one shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl ViewKind {
    /// Window of this view containing `date`, aligned to the view's start
    /// (Monday for weeks, the 1st for months, January 1st for years).
    pub fn window(self, date: NaiveDate) -> Window {
        match self {
            ViewKind::Day => Window::new(date, Period::Days(1), TimeUnit::Hour),
            ViewKind::Week => Window::new(week_start(date), Period::Weeks(1), TimeUnit::Day),
            ViewKind::Month => Window::new(month_start(date), Period::Months(1), TimeUnit::Day),
            ViewKind::Year => Window::new(year_start(date), Period::Months(12), TimeUnit::Day),
        }
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewKind::Day),
            "week" => Ok(ViewKind::Week),
            "month" => Ok(ViewKind::Month),
            "year" => Ok(ViewKind::Year),
            other => Err(format!(
                "Unknown view '{}'. Expected day, week, month or year",
                other
            )),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Day => "day",
            ViewKind::Week => "week",
            ViewKind::Month => "month",
            ViewKind::Year => "year",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_is_half_open() {
        let window = Window::new(date(2021, 9, 15), Period::Weeks(1), TimeUnit::Day);

        assert!(!window.contains(date(2021, 9, 14)));
        assert!(window.contains(date(2021, 9, 15)));
        assert!(window.contains(date(2021, 9, 21)));
        assert!(!window.contains(date(2021, 9, 22)));
        assert_eq!(window.end(), Some(date(2021, 9, 22)));
        assert_eq!(window.days().len(), 7);
    }

    #[test]
    fn test_one_day_window() {
        let window = Window::new(date(2021, 9, 15), Period::Days(1), TimeUnit::Hour);

        assert!(window.contains(date(2021, 9, 15)));
        assert!(!window.contains(date(2021, 9, 16)));
        assert_eq!(window.days(), vec![date(2021, 9, 15)]);
    }

    #[test]
    fn test_month_period_clamps() {
        assert_eq!(Period::Months(1).end_from(date(2021, 1, 31)), Some(date(2021, 2, 28)));
        assert_eq!(Period::Months(1).end_from(date(2021, 9, 1)), Some(date(2021, 10, 1)));
    }

    #[test]
    fn test_unbounded_window() {
        let window = Window::unbounded(date(2021, 9, 15), TimeUnit::Day);

        assert!(window.contains(date(2999, 1, 1)));
        assert!(!window.contains(date(2021, 9, 14)));
        assert_eq!(window.end(), None);
        assert!(window.days().is_empty());
        assert!(window.slots().is_empty());
    }

    #[test]
    fn test_slots() {
        let hours = Window::new(date(2021, 9, 15), Period::Days(1), TimeUnit::Hour).slots();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[10], date(2021, 9, 15).and_hms_opt(10, 0, 0).unwrap());

        let days = Window::new(date(2021, 9, 1), Period::Months(1), TimeUnit::Day).slots();
        assert_eq!(days.len(), 30);
        assert_eq!(days[29], date(2021, 9, 30).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_truncate() {
        let t = date(2021, 9, 15).and_hms_opt(10, 45, 12).unwrap();
        assert_eq!(TimeUnit::Day.truncate(&t), date(2021, 9, 15).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(TimeUnit::Hour.truncate(&t), date(2021, 9, 15).and_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_view_windows_are_aligned() {
        // Wednesday
        let wed = date(2021, 9, 15);

        let week = ViewKind::Week.window(wed);
        assert_eq!(week.anchor(), date(2021, 9, 13));
        assert_eq!(week.end(), Some(date(2021, 9, 20)));

        let month = ViewKind::Month.window(wed);
        assert_eq!(month.anchor(), date(2021, 9, 1));
        assert_eq!(month.unit(), TimeUnit::Day);

        let year = ViewKind::Year.window(wed);
        assert_eq!(year.anchor(), date(2021, 1, 1));
        assert_eq!(year.days().len(), 365);

        let day = ViewKind::Day.window(wed);
        assert_eq!(day.anchor(), wed);
        assert_eq!(day.unit(), TimeUnit::Hour);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("Month".parse::<ViewKind>(), Ok(ViewKind::Month));
        assert!("fortnight".parse::<ViewKind>().is_err());
    }
}
