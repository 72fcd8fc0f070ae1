#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rtimeclock::models::{LogEntry, LogKind};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize an empty test DB
pub fn init_db(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Local wall-clock instant. Dates used in tests avoid DST transitions.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

/// Build entries with sequential ids from `(kind, hour, minute)` on one day.
pub fn day_entries(y: i32, m: u32, d: u32, punches: &[(LogKind, u32, u32)]) -> Vec<LogEntry> {
    punches
        .iter()
        .enumerate()
        .map(|(i, (kind, h, min))| LogEntry::new(i as i64 + 1, *kind, at(y, m, d, *h, *min)))
        .collect()
}

pub const HOUR_MS: i64 = 3_600_000;
pub const MINUTE_MS: i64 = 60_000;
