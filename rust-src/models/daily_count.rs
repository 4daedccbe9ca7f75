//! The per-day count and the mode an invocation runs in.

use chrono::NaiveDate;

use crate::config::DATE_FORMAT;


/// Count recorded for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}


impl DailyCount {
    pub fn new(date: NaiveDate, count: i64) -> Self {
        Self { date, count }
    }

    /// Get date string in YYYY-MM-DD format, as stored in the database.
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// A stored zero reads the same as nothing stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}


/// Format a date the way it is keyed in the store.
pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}


/// What a single invocation does with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the count for the effective date.
    Show,
    /// Record this count for the effective date.
    Set(i64),
}
