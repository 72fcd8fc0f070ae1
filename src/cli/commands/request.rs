use super::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::request::{RequestDraft, RequestKind, RequestRecord};
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date, parse_date_time, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Request {
        kind,
        start,
        end,
        reason,
    } = cmd
    {
        let kind = RequestKind::from_code(kind).ok_or_else(|| {
            AppError::InvalidRequest(format!(
                "unknown request kind '{}'. Use time-off, vacation or adjustment",
                kind
            ))
        })?;

        // Only adjustments carry a time of day.
        let start = match kind {
            RequestKind::Adjustment => {
                parse_date_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?
            }
            _ => parse_date(start)
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
                .ok_or_else(|| AppError::InvalidDate(start.to_string()))?,
        };

        let end = end
            .as_deref()
            .map(|e| parse_date(e).ok_or_else(|| AppError::InvalidDate(e.to_string())))
            .transpose()?;

        let mut session = open_session(cfg)?;
        let record = session.submit_request(
            RequestDraft {
                kind,
                start,
                end,
                reason: reason.clone(),
            },
            today(),
        )?;

        let msg = format!("Your {} request was submitted.", record.kind.label());
        success(&msg);
        print_record(&record);
        info("Requests are not saved: keep this record for your manager.");
        audit(&session, "request", record.kind.label(), &msg);
    }

    Ok(())
}

fn print_record(record: &RequestRecord) {
    let when = match (record.kind, record.end) {
        (RequestKind::Adjustment, _) => record.start.format("%Y-%m-%d %H:%M").to_string(),
        (_, Some(end)) => format!("{} → {}", record.start.date(), end),
        (_, None) => record.start.date().to_string(),
    };

    println!("  #{} {:?}", record.id, record.status);
    println!("  Kind   : {}", record.kind.label());
    println!("  When   : {}", when);
    println!("  Reason : {}", record.reason);
}
