use serde::{Deserialize, Serialize};

/// Kind of a punch. The set is closed: every punch starts or ends
/// a workday, a break or a client visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LogKind {
    // Aliases: legacy Portuguese labels found in older saved logs.
    #[serde(alias = "Início de Jornada")]
    WorkStart,
    #[serde(alias = "Fim de Jornada")]
    WorkEnd,
    #[serde(alias = "Início de Intervalo")]
    BreakStart,
    #[serde(alias = "Fim de Intervalo")]
    BreakEnd,
    #[serde(alias = "Saída para Cliente")]
    ClientStart,
    #[serde(alias = "Retorno do Cliente")]
    ClientEnd,
}

impl LogKind {
    pub const ALL: [LogKind; 6] = [
        LogKind::WorkStart,
        LogKind::WorkEnd,
        LogKind::BreakStart,
        LogKind::BreakEnd,
        LogKind::ClientStart,
        LogKind::ClientEnd,
    ];

    /// Convert CLI code → enum
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "work-start" => Some(Self::WorkStart),
            "work-end" => Some(Self::WorkEnd),
            "break-start" => Some(Self::BreakStart),
            "break-end" => Some(Self::BreakEnd),
            "client-start" => Some(Self::ClientStart),
            "client-end" => Some(Self::ClientEnd),
            _ => None,
        }
    }

    /// Convert enum → CLI code
    pub fn code(&self) -> &'static str {
        match self {
            LogKind::WorkStart => "work-start",
            LogKind::WorkEnd => "work-end",
            LogKind::BreakStart => "break-start",
            LogKind::BreakEnd => "break-end",
            LogKind::ClientStart => "client-start",
            LogKind::ClientEnd => "client-end",
        }
    }

    /// Human readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            LogKind::WorkStart => "Workday start",
            LogKind::WorkEnd => "Workday end",
            LogKind::BreakStart => "Break start",
            LogKind::BreakEnd => "Break end",
            LogKind::ClientStart => "Left for client",
            LogKind::ClientEnd => "Back from client",
        }
    }

    /// The punch closing this one, if it opens an interval.
    pub fn closer(&self) -> Option<LogKind> {
        match self {
            LogKind::WorkStart => Some(LogKind::WorkEnd),
            LogKind::BreakStart => Some(LogKind::BreakEnd),
            LogKind::ClientStart => Some(LogKind::ClientEnd),
            _ => None,
        }
    }
}
