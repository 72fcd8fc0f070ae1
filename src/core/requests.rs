use crate::errors::{AppError, AppResult};
use crate::models::request::{RequestDraft, RequestKind, RequestRecord, RequestStatus};
use chrono::NaiveDate;

/// Requests submitted during the current session. Not persisted.
#[derive(Debug, Default)]
pub struct RequestBook {
    records: Vec<RequestRecord>,
}

impl RequestBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and file it as `Pending`.
    ///
    /// Time off and vacations cannot start before `today`; adjustments fix
    /// past punches and may point anywhere in time. Only vacations keep an
    /// end date, which is then mandatory.
    pub fn submit(&mut self, draft: RequestDraft, today: NaiveDate) -> AppResult<RequestRecord> {
        let reason = draft.reason.trim();
        if reason.is_empty() {
            return Err(AppError::InvalidRequest("a reason is required".into()));
        }

        let start_date = draft.start.date();
        if draft.kind != RequestKind::Adjustment && start_date < today {
            return Err(AppError::InvalidRequest(format!(
                "{} cannot start in the past ({})",
                draft.kind.label(),
                start_date
            )));
        }

        let end = match draft.kind {
            RequestKind::Vacation => {
                let end = draft.end.ok_or_else(|| {
                    AppError::InvalidRequest("a vacation needs an end date".into())
                })?;
                if end < start_date {
                    return Err(AppError::InvalidRequest(format!(
                        "end date {} precedes start date {}",
                        end, start_date
                    )));
                }
                Some(end)
            }
            RequestKind::TimeOff | RequestKind::Adjustment => None,
        };

        let record = RequestRecord {
            id: self.records.last().map_or(1, |r| r.id + 1),
            kind: draft.kind,
            start: draft.start,
            end,
            reason: reason.to_string(),
            status: RequestStatus::Pending,
        };

        self.records.push(record.clone());
        Ok(record)
    }

    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }
}
