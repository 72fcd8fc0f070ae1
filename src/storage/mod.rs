//! Durable key-value storage port.
//!
//! The session writes the whole punch log under [`TIME_LOG_KEY`] after every
//! change and the theme under [`THEME_KEY`]. Values are opaque strings.

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub const TIME_LOG_KEY: &str = "timeLog";
pub const THEME_KEY: &str = "theme";

pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
