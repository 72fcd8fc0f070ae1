pub mod calendar;
pub mod config;
pub mod day;
pub mod init;
pub mod log;
pub mod punch;
pub mod request;
pub mod status;
pub mod theme;
pub mod today;

use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::storage::SqliteStorage;
use crate::ui::messages::warning;
use crate::utils::colors::Palette;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Open the configured database and rehydrate the session from it.
pub fn open_session(cfg: &Config) -> AppResult<Session<SqliteStorage>> {
    let storage = SqliteStorage::open(&cfg.database)?;
    Ok(Session::open(storage, cfg.default_theme))
}

/// Internal log line; a failure here never fails the command.
pub fn audit(session: &Session<SqliteStorage>, operation: &str, target: &str, message: &str) {
    if let Err(e) = session.storage().audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Time/punch table, each row colored by punch kind.
pub fn print_punch_table(palette: &Palette, entries: &[LogEntry], newest_first: bool) {
    let ordered: Vec<&LogEntry> = if newest_first {
        entries.iter().rev().collect()
    } else {
        entries.iter().collect()
    };

    let mut table = Table::new(vec![Column::new("Time", 10), Column::new("Punch", 20)]);
    for entry in &ordered {
        table.add_row(vec![entry.time_str(), entry.kind.label().to_string()]);
    }

    let lines = table.render_lines();
    if let Some((head, rows)) = lines.split_first() {
        println!("{}", bold(head));
        for (line, entry) in rows.iter().zip(ordered) {
            println!("{}", palette.paint(palette.for_kind(entry.kind), line));
        }
    }
}
