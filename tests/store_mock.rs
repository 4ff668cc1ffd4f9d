use chrono::NaiveDate;
use kalenteri::components::calendar::{
    EventId, EventRecord, Period, QueryEngine, Session, TimeUnit, User, Window,
};
use kalenteri::components::event_store::{EventStore, RedisStore};
use kalenteri::components::import::{import_events, IcsReader};
use kalenteri::error::{store_error, CalendarResult, Error};
use std::sync::Arc;

/// Mock store whose backend is always unreachable
#[derive(Debug, Default)]
pub struct UnreachableStore;

impl EventStore for UnreachableStore {
    fn insert(&self, _: &User, _: &str, _: &str, _: &str) -> CalendarResult<EventId> {
        Err(store_error("connection refused"))
    }

    fn all_for_owner(&self, _: &str) -> CalendarResult<Vec<EventRecord>> {
        Err(store_error("connection refused"))
    }

    fn delete_all_for_owner(&self, _: &str) -> CalendarResult<usize> {
        Err(store_error("connection refused"))
    }

    fn delete(&self, _: &str, _: EventId) -> CalendarResult<bool> {
        Err(store_error("connection refused"))
    }
}

fn engine_over(store: Arc<dyn EventStore>) -> QueryEngine {
    let session = Session::for_user(User::new("1", "alice@example.com"));
    let window = Window::new(
        NaiveDate::from_ymd_opt(2021, 9, 15).unwrap(),
        Period::Weeks(1),
        TimeUnit::Day,
    );
    QueryEngine::new(store, &session, window).unwrap()
}

fn is_store_error<T>(result: CalendarResult<T>) -> bool {
    matches!(result, Err(Error::Store(_)))
}

/// Every query surfaces the store failure instead of answering empty
#[test]
fn test_store_failures_surface() {
    let engine = engine_over(Arc::new(UnreachableStore));
    let day = NaiveDate::from_ymd_opt(2021, 9, 16).unwrap();
    let instant = day.and_hms_opt(10, 0, 0).unwrap();

    assert!(is_store_error(engine.events_on_date(day)));
    assert!(is_store_error(engine.all_events_on_day(day)));
    assert!(is_store_error(engine.first_event_for_interval(&instant, TimeUnit::Hour)));
    assert!(is_store_error(engine.first_event_for_slot(&instant)));
    assert!(is_store_error(engine.current_events(&instant)));
    assert!(is_store_error(engine.is_any_in_progress(&instant)));
    assert!(is_store_error(engine.agenda()));
    assert!(is_store_error(engine.add_event("x", "09/16/2021 10:00:00", "09/16/2021 11:00:00")));
    assert!(is_store_error(engine.delete_event(EventId(1))));
    assert!(is_store_error(engine.clear_all_events()));
}

/// Outside the window the store is never consulted
#[test]
fn test_out_of_window_day_skips_store() {
    let engine = engine_over(Arc::new(UnreachableStore));
    let before = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
    assert!(engine.all_events_on_day(before).unwrap().is_empty());
}

#[test]
fn test_import_stops_on_store_failure() {
    let reader = IcsReader::new(
        "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY:One\r\nDTSTART:20210915T000000\r\n\
DTEND:20210915T010000\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
    );
    let user = User::new("1", "alice@example.com");

    assert!(is_store_error(import_events(&UnreachableStore, &user, &reader)));
}

/// Nothing listens on port 1, so the Redis store must report the failure
#[test]
fn test_unreachable_redis_is_fatal() {
    let store = RedisStore::open("redis://127.0.0.1:1/").unwrap();
    let engine = engine_over(Arc::new(store));
    let day = NaiveDate::from_ymd_opt(2021, 9, 16).unwrap();

    assert!(is_store_error(engine.events_on_date(day)));
    assert!(is_store_error(engine.clear_all_events()));
}
