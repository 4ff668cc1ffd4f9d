use super::EventStore;
use crate::components::calendar::{EventId, EventRecord, User};
use crate::error::{store_error, CalendarResult, Error};
use redis::{Client as RedisClient, Commands, Connection};
use std::collections::HashMap;
use tracing::{debug, info};

// Redis key constants
pub mod keys {
    /// Counter handing out event ids
    pub const EVENT_ID_SEQ: &str = "kalenteri:event_id";
    /// Prefix of the per-owner hash of id -> event JSON
    pub const EVENTS_PREFIX: &str = "kalenteri:events:";

    /// Hash key holding one owner's events
    pub fn owner_events(owner_email: &str) -> String {
        format!("{}{}", EVENTS_PREFIX, owner_email)
    }
}

/// Event store backed by Redis, one hash per owner
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a store for the given Redis URL. No connection is made until
    /// the first operation.
    pub fn open(redis_url: &str) -> CalendarResult<Self> {
        info!("Using Redis event store at {}", redis_url);

        let client = RedisClient::open(redis_url)
            .map_err(|e| store_error(&format!("Failed to create Redis client: {}", e)))?;

        Ok(Self { client })
    }

    /// Get a redis connection
    fn connection(&self) -> CalendarResult<Connection> {
        self.client
            .get_connection()
            .map_err(|e| store_error(&format!("Failed to connect to Redis: {}", e)))
    }
}

impl EventStore for RedisStore {
    fn insert(
        &self,
        owner: &User,
        name: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> CalendarResult<EventId> {
        let mut conn = self.connection()?;

        let id: u64 = conn
            .incr(keys::EVENT_ID_SEQ, 1)
            .map_err(|e| store_error(&format!("Failed to allocate event id: {}", e)))?;
        let id = EventId(id);

        let event = EventRecord::new(owner.email.as_str(), name, start_raw, end_raw).with_id(id);
        let event_json = serde_json::to_string(&event)?;

        let _: i64 = conn
            .hset(keys::owner_events(&owner.email), id.0, event_json)
            .map_err(|e| store_error(&format!("Failed to save event to Redis: {}", e)))?;

        debug!("Stored event {} for {} (owner id {})", id, owner.email, owner.id);
        Ok(id)
    }

    fn all_for_owner(&self, owner_email: &str) -> CalendarResult<Vec<EventRecord>> {
        let mut conn = self.connection()?;

        let stored: HashMap<u64, String> = conn
            .hgetall(keys::owner_events(owner_email))
            .map_err(|e| store_error(&format!("Failed to read events from Redis: {}", e)))?;

        let mut events = stored
            .into_values()
            .map(|json| serde_json::from_str::<EventRecord>(&json).map_err(Error::from))
            .collect::<CalendarResult<Vec<_>>>()?;
        events.sort_by_key(|e| e.id());

        Ok(events)
    }

    fn delete_all_for_owner(&self, owner_email: &str) -> CalendarResult<usize> {
        let mut conn = self.connection()?;
        let key = keys::owner_events(owner_email);

        let (count, _): (usize, i64) = redis::pipe()
            .atomic()
            .hlen(&key)
            .del(&key)
            .query(&mut conn)
            .map_err(|e| store_error(&format!("Failed to delete events from Redis: {}", e)))?;

        Ok(count)
    }

    fn delete(&self, owner_email: &str, id: EventId) -> CalendarResult<bool> {
        let mut conn = self.connection()?;

        let removed: i64 = conn
            .hdel(keys::owner_events(owner_email), id.0)
            .map_err(|e| store_error(&format!("Failed to delete event from Redis: {}", e)))?;

        Ok(removed > 0)
    }
}
