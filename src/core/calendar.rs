//! Calendar view: punches grouped by local calendar day.

use crate::models::LogEntry;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Partition the whole log by local calendar date.
///
/// Every entry lands in exactly one bucket; inside a bucket the insertion
/// order is kept.
pub fn group_by_day(entries: &[LogEntry]) -> BTreeMap<NaiveDate, Vec<LogEntry>> {
    let mut map: BTreeMap<NaiveDate, Vec<LogEntry>> = BTreeMap::new();
    for entry in entries {
        map.entry(entry.date()).or_default().push(entry.clone());
    }
    map
}

/// An odd number of punches on a day means one was probably forgotten.
/// Only the count matters, not the kinds.
pub fn has_odd_punch_count(entries: &[LogEntry]) -> bool {
    entries.len() % 2 != 0
}

#[derive(Debug, Default, Clone)]
pub struct CalendarIndex {
    days: BTreeMap<NaiveDate, Vec<LogEntry>>,
}

impl CalendarIndex {
    pub fn build(entries: &[LogEntry]) -> Self {
        Self {
            days: group_by_day(entries),
        }
    }

    /// Punches of `date`; empty when nothing was recorded.
    pub fn day(&self, date: NaiveDate) -> &[LogEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_entries(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn is_odd(&self, date: NaiveDate) -> bool {
        has_odd_punch_count(self.day(date))
    }

    /// Days whose punch count is odd, oldest first.
    pub fn odd_days(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|(_, entries)| has_odd_punch_count(entries))
            .map(|(d, _)| *d)
            .collect()
    }

    pub fn days(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.keys()
    }

    pub fn days_in_year(&self, year: i32) -> usize {
        self.days.keys().filter(|d| d.year() == year).count()
    }
}

/// Cells of a month laid out in Sunday-first weeks.
///
/// Leading `None`s pad the first week up to the weekday of the 1st;
/// the remaining cells are the day numbers.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; leading];
    cells.extend(
        crate::utils::date::all_days_of_month(year, month)
            .iter()
            .map(|d| Some(d.day())),
    );
    cells
}
