use super::log_kind::LogKind;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single punch. Created only by a punch action, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(id: i64, kind: LogKind, timestamp: DateTime<Local>) -> Self {
        Self {
            id,
            kind,
            timestamp,
        }
    }

    /// Local calendar day of the punch.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
