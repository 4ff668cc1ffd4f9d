//! `.ics` reading with the icalendar crate's parser.

use super::{ImportEntry, ImportSource};
use crate::error::{import_error, CalendarResult};
use icalendar::parser::{read_calendar, unfold};
use std::path::Path;
use tracing::debug;

/// Summary used for events without one
pub const UNTITLED: &str = "(No title)";

/// Reads `VEVENT`s out of iCalendar text
#[derive(Debug, Clone)]
pub struct IcsReader {
    content: String,
}

impl IcsReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!("Read {} bytes from {}", content.len(), path.as_ref().display());
        Ok(Self::new(content))
    }
}

impl ImportSource for IcsReader {
    fn entries(&self) -> CalendarResult<Vec<ImportEntry>> {
        let unfolded = unfold(&self.content);
        let calendar = read_calendar(&unfolded)
            .map_err(|e| import_error(&format!("Failed to parse calendar: {}", e)))?;

        let entries = calendar
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .map(|vevent| {
                let prop = |name: &str| {
                    vevent
                        .find_prop(name)
                        .map(|p| basic_value(p.val.as_ref()).to_string())
                        .unwrap_or_default()
                };

                ImportEntry {
                    name: vevent
                        .find_prop("SUMMARY")
                        .map(|p| p.val.to_string())
                        .filter(|s| !s.trim().is_empty())
                        .unwrap_or_else(|| UNTITLED.to_string()),
                    start_raw: prop("DTSTART"),
                    end_raw: prop("DTEND"),
                }
            })
            .collect();

        Ok(entries)
    }
}

/// Strip the UTC designator so the value is plain basic encoding
fn basic_value(value: &str) -> &str {
    let value = value.trim();
    value.strip_suffix('Z').unwrap_or(value)
}
