use super::overlap;
use crate::utils::time::{self, RawTime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated calendar user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// A single calendar event owned by one user.
///
/// Start and end are kept as the raw strings they were stored with; the
/// parsed instants are recomputed on every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    id: Option<EventId>,
    owner_email: String,
    name: String,
    start_raw: String,
    end_raw: String,
}

impl EventRecord {
    /// Create an unsaved event
    pub fn new(
        owner_email: impl Into<String>,
        name: impl Into<String>,
        start_raw: impl Into<String>,
        end_raw: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            owner_email: owner_email.into(),
            name: name.into(),
            start_raw: start_raw.into(),
            end_raw: end_raw.into(),
        }
    }

    /// Attach the identifier assigned by a store
    pub fn with_id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    /// Store identifier, `None` before the event is persisted
    pub fn id(&self) -> Option<EventId> {
        self.id
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Start exactly as stored
    pub fn start_raw(&self) -> &str {
        &self.start_raw
    }

    /// End exactly as stored
    pub fn end_raw(&self) -> &str {
        &self.end_raw
    }

    /// Start in canonical form, or the invalid sentinel
    pub fn start(&self) -> String {
        time::normalize(&self.start_raw)
    }

    /// End in canonical form, or the invalid sentinel
    pub fn end(&self) -> String {
        time::normalize(&self.end_raw)
    }

    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        time::parse(&self.start_raw).instant()
    }

    pub fn end_instant(&self) -> Option<NaiveDateTime> {
        time::parse(&self.end_raw).instant()
    }

    /// Whether both bounds parse
    pub fn has_valid_span(&self) -> bool {
        time::parse(&self.start_raw).is_valid() && time::parse(&self.end_raw).is_valid()
    }

    /// Start later than end. Such events are kept but never in progress.
    pub fn is_inverted(&self) -> bool {
        matches!(
            (self.start_instant(), self.end_instant()),
            (Some(start), Some(end)) if start > end
        )
    }

    /// Whether `at` lies inside this event's span, boundaries included.
    /// Events with an unparseable bound are never in progress.
    pub fn is_in_progress(&self, at: &NaiveDateTime) -> bool {
        match (time::parse(&self.start_raw), time::parse(&self.end_raw)) {
            (RawTime::Valid(start), RawTime::Valid(end)) => overlap::in_progress(&start, &end, at),
            _ => false,
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.name, self.start(), self.end())
    }
}
