pub mod models;
pub mod overlap;
mod query;
pub mod session;
pub mod window;

pub use models::{EventId, EventRecord, User};
pub use query::{QueryEngine, Slot};
pub use session::{Session, SessionProvider};
pub use window::{Period, TimeUnit, ViewKind, Window};
