pub mod calendar;
pub mod config;
pub mod log;
pub mod requests;
pub mod session;
pub mod status;
pub mod summary;
pub mod timelog;

pub use session::Session;
pub use summary::{format_duration, summarize};
pub use timelog::TimeLog;
