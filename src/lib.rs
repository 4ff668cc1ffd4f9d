//! Personal calendar event model and interval queries.
//!
//! Events are stored per user with their times as text, and answered through a
//! [`components::calendar::QueryEngine`] bound to one user and one window.

pub mod components;
pub mod config;
pub mod error;
pub mod utils;
