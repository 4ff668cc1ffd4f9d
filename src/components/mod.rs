// Export components
pub mod calendar;
pub mod event_store;
pub mod import;

// Re-export the query surface
pub use calendar::{EventRecord, QueryEngine, Session, SessionProvider, User};
pub use event_store::{EventStore, MemoryStore, RedisStore};
