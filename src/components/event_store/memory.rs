use super::EventStore;
use crate::components::calendar::{EventId, EventRecord, User};
use crate::error::{store_error, CalendarResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    events: HashMap<String, BTreeMap<EventId, EventRecord>>,
}

/// Process-local event store, used for tests and offline sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CalendarResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| store_error(&format!("Memory store lock poisoned: {}", e)))
    }
}

impl EventStore for MemoryStore {
    fn insert(
        &self,
        owner: &User,
        name: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> CalendarResult<EventId> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let id = EventId(inner.last_id);

        let event = EventRecord::new(owner.email.as_str(), name, start_raw, end_raw).with_id(id);
        inner
            .events
            .entry(owner.email.clone())
            .or_default()
            .insert(id, event);

        Ok(id)
    }

    fn all_for_owner(&self, owner_email: &str) -> CalendarResult<Vec<EventRecord>> {
        let inner = self.lock()?;
        Ok(inner
            .events
            .get(owner_email)
            .map(|events| events.values().cloned().collect())
            .unwrap_or_default())
    }

    fn delete_all_for_owner(&self, owner_email: &str) -> CalendarResult<usize> {
        let mut inner = self.lock()?;
        Ok(inner
            .events
            .remove(owner_email)
            .map(|events| events.len())
            .unwrap_or(0))
    }

    fn delete(&self, owner_email: &str, id: EventId) -> CalendarResult<bool> {
        let mut inner = self.lock()?;
        Ok(inner
            .events
            .get_mut(owner_email)
            .is_some_and(|events| events.remove(&id).is_some()))
    }
}
