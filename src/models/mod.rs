pub mod log_entry;
pub mod log_kind;
pub mod request;
pub mod summary;
pub mod theme;

pub use log_entry::LogEntry;
pub use log_kind::LogKind;
pub use summary::Summary;
pub use theme::Theme;

/// Activity the user is in, derived from the most recent punch.
/// `None` means no workday is open.
pub type CurrentStatus = Option<LogKind>;
