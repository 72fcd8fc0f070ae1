use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestKind {
    TimeOff,
    Vacation,
    Adjustment,
}

impl RequestKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().replace('_', "-").as_str() {
            "time-off" | "timeoff" => Some(RequestKind::TimeOff),
            "vacation" => Some(RequestKind::Vacation),
            "adjustment" => Some(RequestKind::Adjustment),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::TimeOff => "Time off",
            RequestKind::Vacation => "Vacation",
            RequestKind::Adjustment => "Manual adjustment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Input collected by the request form, before validation.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    pub kind: RequestKind,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDate>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub id: i64,
    pub kind: RequestKind,
    /// Date of the request; adjustments also carry the time of day.
    pub start: NaiveDateTime,
    /// Only set for vacations.
    pub end: Option<NaiveDate>,
    pub reason: String,
    pub status: RequestStatus,
}
