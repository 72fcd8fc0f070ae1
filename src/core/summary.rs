//! Workday summary: worked, break and client time of one day's punches,
//! plus the legal minimum-break check.

use crate::models::{LogEntry, LogKind, Summary};
use chrono::{DateTime, Local};

pub use crate::utils::formatting::format_duration;

/// One hour: the minimum total break a closed workday must contain.
pub const LEGAL_MIN_BREAK_MS: i64 = 60 * 60 * 1000;

/// Summarize the punches of a single day.
///
/// `now` closes the day when the last punch is not a `WorkEnd`.
/// Malformed sequences never fail:
/// - without any `WorkStart` the summary is all zero
/// - a start counts only when the very next punch is its end; anything
///   else (a second start, a different kind, nothing) contributes zero
pub fn summarize(entries: &[LogEntry], now: DateTime<Local>) -> Summary {
    let Some(first_start) = entries.iter().find(|e| e.kind == LogKind::WorkStart) else {
        return Summary::default();
    };

    let break_ms = paired_millis(entries, LogKind::BreakStart);
    let client_ms = paired_millis(entries, LogKind::ClientStart);

    // `entries` is non-empty here: it holds at least `first_start`.
    let closed = entries
        .last()
        .is_some_and(|last| last.kind == LogKind::WorkEnd);
    let end_ms = match entries.last() {
        Some(last) if closed => last.millis(),
        _ => now.timestamp_millis(),
    };

    let total_elapsed = end_ms - first_start.millis();
    let worked_ms = (total_elapsed - break_ms).max(0);

    Summary {
        worked_ms,
        break_ms,
        client_ms,
        show_warning: closed && break_ms < LEGAL_MIN_BREAK_MS,
    }
}

/// Sum of `start → closer` intervals where the closer immediately follows.
fn paired_millis(entries: &[LogEntry], start: LogKind) -> i64 {
    let Some(closer) = start.closer() else {
        return 0;
    };

    entries
        .windows(2)
        .filter(|w| w[0].kind == start && w[1].kind == closer)
        .map(|w| w[1].millis() - w[0].millis())
        .sum()
}

