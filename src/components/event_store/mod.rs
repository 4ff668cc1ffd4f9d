mod memory;
mod redis_store;

pub use self::memory::MemoryStore;
pub use self::redis_store::{keys, RedisStore};

use crate::components::calendar::{EventId, EventRecord, User};
use crate::error::CalendarResult;

/// Per-user persistence for calendar events.
///
/// Implementations return each owner's events ascending by id and report
/// every backend failure as an error; callers never retry.
pub trait EventStore: Send + Sync {
    /// Persist a new event for `owner` and return its identifier
    fn insert(
        &self,
        owner: &User,
        name: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> CalendarResult<EventId>;

    /// All events of one owner, ascending by id
    fn all_for_owner(&self, owner_email: &str) -> CalendarResult<Vec<EventRecord>>;

    /// Remove every event of one owner, returning how many were removed
    fn delete_all_for_owner(&self, owner_email: &str) -> CalendarResult<usize>;

    /// Remove one event of one owner. `false` when the owner has no such event.
    fn delete(&self, owner_email: &str, id: EventId) -> CalendarResult<bool>;
}
