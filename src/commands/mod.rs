use kalenteri::components::calendar::{QueryEngine, Session, Window};
use kalenteri::components::event_store::EventStore;
use kalenteri::config::Config;
use kalenteri::error::CalendarResult;
use std::fmt;
use std::sync::Arc;

// Export submodules
pub mod calendar;
pub mod manage;
pub mod util;

/// Shared context for all commands
pub struct CommandContext {
    pub config: Config,
    pub store: Arc<dyn EventStore>,
    pub session: Session,
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish()
    }
}

impl CommandContext {
    /// Create a new command context with the configured user logged in
    pub fn new(config: Config, store: Arc<dyn EventStore>) -> Self {
        let session = config.session();
        Self {
            config,
            store,
            session,
        }
    }

    /// Engine scoped to `window`
    pub fn engine(&self, window: Window) -> CalendarResult<QueryEngine> {
        QueryEngine::new(Arc::clone(&self.store), &self.session, window)
    }

    /// Engine for plain lookups with no window limit
    pub fn lookup_engine(&self) -> CalendarResult<QueryEngine> {
        QueryEngine::for_session(Arc::clone(&self.store), &self.session)
    }
}

/// Type alias for command result
pub type CommandResult = miette::Result<()>;
