mod ics;

pub use ics::{IcsReader, UNTITLED};

use crate::components::calendar::{EventRecord, User};
use crate::components::event_store::EventStore;
use crate::error::CalendarResult;
use tracing::{info, warn};

/// One event as supplied by an external source, times in basic encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub name: String,
    pub start_raw: String,
    pub end_raw: String,
}

/// Producer of raw event triples, e.g. a calendar file
pub trait ImportSource {
    fn entries(&self) -> CalendarResult<Vec<ImportEntry>>;
}

/// Outcome of an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Normalize every entry of `source` and insert it for `owner`.
///
/// Entries whose start or end cannot be parsed are skipped and counted.
/// A store failure aborts the import; entries inserted before it stay.
pub fn import_events(
    store: &dyn EventStore,
    owner: &User,
    source: &dyn ImportSource,
) -> CalendarResult<ImportReport> {
    let mut report = ImportReport::default();

    for entry in source.entries()? {
        let record = EventRecord::new(
            owner.email.as_str(),
            entry.name.as_str(),
            entry.start_raw.as_str(),
            entry.end_raw.as_str(),
        );

        if !record.has_valid_span() {
            warn!(
                "Skipping '{}': unparseable time (start {:?}, end {:?})",
                entry.name, entry.start_raw, entry.end_raw
            );
            report.skipped += 1;
            continue;
        }

        store.insert(owner, record.name(), &record.start(), &record.end())?;
        report.imported += 1;
    }

    info!(
        "Imported {} events for {} ({} skipped)",
        report.imported, owner.email, report.skipped
    );
    Ok(report)
}
