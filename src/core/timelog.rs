//! Append-only punch log.
//!
//! The log owns the rule deriving the current status from its tail.
//! Every other view (summaries, calendar) is computed from `entries()`.

use crate::errors::{AppError, AppResult};
use crate::models::{CurrentStatus, LogEntry, LogKind};
use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Default, Clone)]
pub struct TimeLog {
    entries: Vec<LogEntry>,
}

impl TimeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already ordered entries (e.g. rehydrated ones).
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Append a punch recorded at `now`.
    ///
    /// Ending a workday that was never started is refused: the log is left
    /// untouched and `None` is returned.
    pub fn append(&mut self, kind: LogKind, now: DateTime<Local>) -> Option<LogEntry> {
        if kind == LogKind::WorkEnd && self.current_status().is_none() {
            return None;
        }

        let entry = LogEntry::new(self.next_id(&now), kind, now);
        self.entries.push(entry.clone());
        Some(entry)
    }

    /// Ids follow the wall clock in milliseconds but never repeat or go back.
    fn next_id(&self, now: &DateTime<Local>) -> i64 {
        let millis = now.timestamp_millis();
        match self.entries.last() {
            Some(last) if last.id >= millis => last.id + 1,
            _ => millis,
        }
    }

    pub fn current_status(&self) -> CurrentStatus {
        match self.entries.last() {
            Some(last) if last.kind != LogKind::WorkEnd => Some(last.kind),
            _ => None,
        }
    }

    /// Punches recorded on the given local calendar day, in insertion order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.date() == date)
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole log as the `timeLog` JSON blob.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Rehydrate a `timeLog` blob.
    ///
    /// A blob that is not a JSON array is an error. Single items that cannot
    /// be parsed are dropped; one warning per dropped item is returned.
    pub fn from_json(text: &str) -> AppResult<(Self, Vec<String>)> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| AppError::CorruptLog(e.to_string()))?;

        let serde_json::Value::Array(items) = value else {
            return Err(AppError::CorruptLog("expected a JSON array".into()));
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut warnings = Vec::new();

        for (pos, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<LogEntry>(item) {
                Ok(entry) => entries.push(entry),
                Err(e) => warnings.push(format!("Dropped stored punch #{}: {}", pos + 1, e)),
            }
        }

        Ok((Self::from_entries(entries), warnings))
    }
}
