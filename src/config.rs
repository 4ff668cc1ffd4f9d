use crate::components::calendar::{Session, TimeUnit, User, ViewKind};
use crate::error::{config_error, env_error, CalendarResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Location of the optional view settings file
pub const VIEW_SETTINGS_PATH: &str = "config/calendar.toml";

/// Calendar view defaults, read from `config/calendar.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// View shown when none is given
    pub default_view: ViewKind,
    /// Slot granularity for lookups without an explicit unit
    pub granularity: TimeUnit,
}

impl ViewSettings {
    /// Read settings from `path`; a missing file gives the defaults
    pub fn load_from(path: impl AsRef<Path>) -> CalendarResult<Self> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Redis connection URL for the event store
    pub redis_url: String,
    /// Identifier of the acting user
    pub user_id: String,
    /// Email of the acting user, which scopes every query
    pub user_email: String,
    /// View defaults
    pub views: ViewSettings,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CalendarResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        check_redis_url(&redis_url)?;

        let user_email = env::var("CALENDAR_USER_EMAIL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| env_error("CALENDAR_USER_EMAIL"))?;
        let user_id = env::var("CALENDAR_USER_ID").unwrap_or_else(|_| user_email.clone());

        let views = ViewSettings::load_from(VIEW_SETTINGS_PATH)?;

        Ok(Config {
            redis_url,
            user_id,
            user_email,
            views,
        })
    }

    /// The configured user
    pub fn user(&self) -> User {
        User::new(self.user_id.as_str(), self.user_email.as_str())
    }

    /// A session with the configured user logged in
    pub fn session(&self) -> Session {
        Session::for_user(self.user())
    }
}

/// Schemes the Redis client accepts
const REDIS_SCHEMES: [&str; 4] = ["redis://", "rediss://", "unix://", "redis+unix://"];

fn check_redis_url(url: &str) -> CalendarResult<()> {
    if REDIS_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(config_error(&format!(
            "REDIS_URL '{}' must start with one of {}",
            url,
            REDIS_SCHEMES.join(", ")
        )))
    }
}
