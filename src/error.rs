use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the calendar
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("No active session: log in before querying events")]
    #[diagnostic(
        code(kalenteri::no_session),
        help("set CALENDAR_USER_EMAIL or log a user in to the session")
    )]
    NoSession,

    #[error("Event store error: {0}")]
    #[diagnostic(code(kalenteri::store))]
    Store(String),

    #[error("Import error: {0}")]
    #[diagnostic(code(kalenteri::import))]
    Import(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(kalenteri::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(kalenteri::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(kalenteri::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(kalenteri::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(kalenteri::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CalendarResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create event store errors
pub fn store_error(message: &str) -> Error {
    Error::Store(message.to_string())
}

/// Helper to create import errors
pub fn import_error(message: &str) -> Error {
    Error::Import(message.to_string())
}
