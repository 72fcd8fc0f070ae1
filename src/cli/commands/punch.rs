use super::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::{available_actions, describe, is_available};
use crate::core::summary::format_duration;
use crate::errors::{AppError, AppResult};
use crate::models::LogKind;
use crate::ui::messages::{info, success, warning};
use chrono::Local;

/// Record a punch at the current time.
///
/// Punches the clock does not offer in the current status are refused with
/// a warning; this is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind } = cmd {
        let kind =
            LogKind::from_code(kind).ok_or_else(|| AppError::InvalidLogKind(kind.to_string()))?;

        let mut session = open_session(cfg)?;
        let status = session.current_status();

        if !is_available(status, kind) {
            let offered: Vec<&str> = available_actions(status).iter().map(|k| k.code()).collect();
            warning(format!(
                "'{}' is not available now ({}). Available: {}",
                kind.code(),
                describe(status),
                offered.join(", ")
            ));
            return Ok(());
        }

        let now = Local::now();
        let Some(entry) = session.punch(kind, now) else {
            warning("No workday in progress: nothing to end.");
            return Ok(());
        };

        let msg = format!("{} at {}", entry.kind.label(), entry.time_str());
        success(&msg);
        audit(&session, "punch", kind.code(), &msg);

        if kind == LogKind::WorkEnd {
            let summary = session.today_summary(now);
            info(format!(
                "Workday closed: worked {}, break {}. Enjoy your rest!",
                format_duration(summary.worked_ms),
                format_duration(summary.break_ms)
            ));
        }
    }

    Ok(())
}
