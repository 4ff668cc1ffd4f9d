use super::models::{EventId, EventRecord, User};
use super::session::SessionProvider;
use super::window::{TimeUnit, Window};
use crate::components::event_store::EventStore;
use crate::error::{CalendarResult, Error};
use crate::utils::time::{self, RawTime};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One slot of a window together with the event shown in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub event: Option<EventRecord>,
}

/// Range-scoped event queries for one user.
///
/// The user is captured from the session when the engine is built. Every
/// query reads that user's events from the store afresh; store failures are
/// returned to the caller unchanged.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn EventStore>,
    user: User,
    window: Window,
}

impl QueryEngine {
    /// Build an engine for the session's user scoped to `window`
    pub fn new(
        store: Arc<dyn EventStore>,
        session: &dyn SessionProvider,
        window: Window,
    ) -> CalendarResult<Self> {
        let user = session.current_user().ok_or(Error::NoSession)?;
        debug!(
            "Query engine for {} from {} ({:?}, {:?})",
            user.email,
            window.anchor(),
            window.period(),
            window.unit()
        );

        Ok(Self {
            store,
            user,
            window,
        })
    }

    /// Build an engine for the session's user with an open-ended window
    /// starting today, for plain single-date lookups
    pub fn for_session(
        store: Arc<dyn EventStore>,
        session: &dyn SessionProvider,
    ) -> CalendarResult<Self> {
        let today = Local::now().date_naive();
        Self::new(store, session, Window::unbounded(today, TimeUnit::Day))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The user's events, ascending by id
    fn load_events(&self) -> CalendarResult<Vec<EventRecord>> {
        let mut events = self.store.all_for_owner(&self.user.email)?;
        events.sort_by_key(|e| e.id());
        debug!("Loaded {} events for {}", events.len(), self.user.email);
        Ok(events)
    }

    /// Events whose start falls on `date`, regardless of the window
    pub fn events_on_date(&self, date: NaiveDate) -> CalendarResult<Vec<EventRecord>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|e| starts_on(e, date))
            .collect())
    }

    /// Events whose start falls on `date`, empty when `date` lies outside
    /// the window
    pub fn all_events_on_day(&self, date: NaiveDate) -> CalendarResult<Vec<EventRecord>> {
        if !self.window.contains(date) {
            debug!("{} is outside the query window", date);
            return Ok(Vec::new());
        }
        self.events_on_date(date)
    }

    /// First event whose start, truncated to `unit`, equals `instant`
    /// truncated to `unit`
    pub fn first_event_for_interval(
        &self,
        instant: &NaiveDateTime,
        unit: TimeUnit,
    ) -> CalendarResult<Option<EventRecord>> {
        let target = unit.truncate(instant);
        Ok(self
            .load_events()?
            .into_iter()
            .find(|e| starts_in(e, &target, unit)))
    }

    /// [`Self::first_event_for_interval`] at the window's granularity
    pub fn first_event_for_slot(
        &self,
        instant: &NaiveDateTime,
    ) -> CalendarResult<Option<EventRecord>> {
        self.first_event_for_interval(instant, self.window.unit())
    }

    /// Events in progress at `at`, boundaries included
    pub fn current_events(&self, at: &NaiveDateTime) -> CalendarResult<Vec<EventRecord>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|e| e.is_in_progress(at))
            .collect())
    }

    /// Whether any event is in progress at `at`
    pub fn is_any_in_progress(&self, at: &NaiveDateTime) -> CalendarResult<bool> {
        Ok(self.load_events()?.iter().any(|e| e.is_in_progress(at)))
    }

    /// Every slot of the window with the first event starting in it.
    /// Open-ended windows have no slots.
    pub fn agenda(&self) -> CalendarResult<Vec<Slot>> {
        let events = self.load_events()?;
        let unit = self.window.unit();

        Ok(self
            .window
            .slots()
            .into_iter()
            .map(|start| Slot {
                start,
                event: events.iter().find(|e| starts_in(e, &start, unit)).cloned(),
            })
            .collect())
    }

    /// Store a manually entered event for this user.
    ///
    /// Times are normalized to the canonical form; unparseable input is
    /// stored as the invalid sentinel.
    pub fn add_event(
        &self,
        name: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> CalendarResult<EventRecord> {
        let start = time::parse(start_raw);
        let end = time::parse(end_raw);

        if !start.is_valid() || !end.is_valid() {
            warn!(
                "Event '{}' has an unparseable time (start {:?}, end {:?})",
                name, start_raw, end_raw
            );
        }
        if let (RawTime::Valid(s), RawTime::Valid(e)) = (start, end) {
            if s > e {
                warn!("Event '{}' ends before it starts", name);
            }
        }

        let start = start.to_string();
        let end = end.to_string();
        let id = self.store.insert(&self.user, name, &start, &end)?;
        info!("Added event {} '{}' for {}", id, name, self.user.email);

        Ok(EventRecord::new(self.user.email.as_str(), name, start, end).with_id(id))
    }

    /// Delete one of this user's events
    pub fn delete_event(&self, id: EventId) -> CalendarResult<bool> {
        let removed = self.store.delete(&self.user.email, id)?;
        if removed {
            info!("Deleted event {} for {}", id, self.user.email);
        }
        Ok(removed)
    }

    /// Delete every event of this user
    pub fn clear_all_events(&self) -> CalendarResult<()> {
        let removed = self.store.delete_all_for_owner(&self.user.email)?;
        info!("Cleared {} events for {}", removed, self.user.email);
        Ok(())
    }
}

fn starts_on(event: &EventRecord, date: NaiveDate) -> bool {
    event.start_instant().is_some_and(|start| start.date() == date)
}

/// `target` must already be truncated to `unit`
fn starts_in(event: &EventRecord, target: &NaiveDateTime, unit: TimeUnit) -> bool {
    event
        .start_instant()
        .is_some_and(|start| unit.truncate(&start) == *target)
}
