//! Session state: the punch log, the requests of this session and the
//! theme, with persistence through an injected [`Storage`].
//!
//! Storage problems never abort the session. They are reported through
//! `ui::messages` and kept in `issues()`; the in-memory state stays
//! authoritative.

use crate::core::calendar::CalendarIndex;
use crate::core::requests::RequestBook;
use crate::core::summary::summarize;
use crate::core::timelog::TimeLog;
use crate::errors::AppResult;
use crate::models::request::{RequestDraft, RequestRecord};
use crate::models::{CurrentStatus, LogEntry, LogKind, Summary, Theme};
use crate::storage::{Storage, THEME_KEY, TIME_LOG_KEY};
use crate::ui::messages;
use chrono::{DateTime, Local, NaiveDate};

pub struct Session<S: Storage> {
    storage: S,
    log: TimeLog,
    requests: RequestBook,
    theme: Theme,
    issues: Vec<String>,
}

impl<S: Storage> Session<S> {
    /// Rehydrate the session from `storage`.
    ///
    /// A missing or unreadable log starts an empty one. `default_theme`
    /// applies when no valid theme was stored.
    pub fn open(storage: S, default_theme: Theme) -> Self {
        let mut session = Self {
            storage,
            log: TimeLog::new(),
            requests: RequestBook::new(),
            theme: default_theme,
            issues: Vec::new(),
        };

        session.load_log();
        session.load_theme();
        session
    }

    fn load_log(&mut self) {
        let raw = match self.storage.get(TIME_LOG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                self.report(format!("Failed to load time log, starting empty: {}", e));
                return;
            }
        };

        match TimeLog::from_json(&raw) {
            Ok((log, dropped)) => {
                self.log = log;
                for w in dropped {
                    self.report(w);
                }
            }
            Err(e) => self.report(format!("Failed to parse time log, starting empty: {}", e)),
        }
    }

    fn load_theme(&mut self) {
        match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => match Theme::parse(&raw) {
                Ok(theme) => self.theme = theme,
                Err(e) => self.report(format!("Ignoring stored theme: {}", e)),
            },
            Ok(None) => {}
            Err(e) => self.report(format!("Failed to load theme: {}", e)),
        }
    }

    fn report(&mut self, msg: String) {
        messages::warning(&msg);
        self.issues.push(msg);
    }

    fn persist_log(&mut self) {
        let result = self
            .log
            .to_json()
            .and_then(|json| self.storage.set(TIME_LOG_KEY, &json));

        if let Err(e) = result {
            self.report(format!("Failed to save time log: {}", e));
        }
    }

    /// Record a punch at `now` and save the log.
    ///
    /// Returns `None` when the punch was refused (ending a workday that was
    /// never started); nothing is written in that case.
    pub fn punch(&mut self, kind: LogKind, now: DateTime<Local>) -> Option<LogEntry> {
        let entry = self.log.append(kind, now)?;
        self.persist_log();
        Some(entry)
    }

    pub fn current_status(&self) -> CurrentStatus {
        self.log.current_status()
    }

    pub fn log(&self) -> &TimeLog {
        &self.log
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<LogEntry> {
        self.log.entries_on(date)
    }

    pub fn today_entries(&self, now: DateTime<Local>) -> Vec<LogEntry> {
        self.log.entries_on(now.date_naive())
    }

    /// Summary of today's punches; an open day runs until `now`.
    pub fn today_summary(&self, now: DateTime<Local>) -> Summary {
        summarize(&self.today_entries(now), now)
    }

    pub fn calendar(&self) -> CalendarIndex {
        CalendarIndex::build(self.log.entries())
    }

    pub fn submit_request(
        &mut self,
        draft: RequestDraft,
        today: NaiveDate,
    ) -> AppResult<RequestRecord> {
        self.requests.submit(draft, today)
    }

    pub fn requests(&self) -> &[RequestRecord] {
        self.requests.records()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            self.report(format!("Failed to save theme: {}", e));
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Non-fatal storage problems met so far.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
