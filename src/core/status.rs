use crate::models::{CurrentStatus, LogKind};

/// True while the user is at work and not on a break or with a client.
pub fn is_working(status: CurrentStatus) -> bool {
    matches!(
        status,
        Some(LogKind::WorkStart | LogKind::BreakEnd | LogKind::ClientEnd)
    )
}

/// Punches the clock offers for the given status.
///
/// - no open workday: only `WorkStart`
/// - working: go on a break, leave for a client, or end the day
/// - on a break / with a client: only the matching return
pub fn available_actions(status: CurrentStatus) -> Vec<LogKind> {
    match status {
        Some(LogKind::BreakStart) => vec![LogKind::BreakEnd],
        Some(LogKind::ClientStart) => vec![LogKind::ClientEnd],
        s if is_working(s) => vec![LogKind::BreakStart, LogKind::ClientStart, LogKind::WorkEnd],
        _ => vec![LogKind::WorkStart],
    }
}

pub fn is_available(status: CurrentStatus, kind: LogKind) -> bool {
    available_actions(status).contains(&kind)
}

/// Short description of the status for the clock header.
pub fn describe(status: CurrentStatus) -> &'static str {
    match status {
        Some(LogKind::BreakStart) => "On a break",
        Some(LogKind::ClientStart) => "With a client",
        s if is_working(s) => "Working",
        _ => "Off the clock",
    }
}
