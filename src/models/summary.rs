/// Aggregated durations of one workday, in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub worked_ms: i64,
    pub break_ms: i64,
    pub client_ms: i64,
    /// Closed workday with less than the legal minimum break.
    pub show_warning: bool,
}
