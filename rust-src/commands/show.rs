//! Show the count recorded for a date.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{date_key, DailyCount};
use crate::storage::Store;


/// Print the count for `date`, or a hint when nothing is recorded.
///
/// A missing record is not an error.
pub fn run(store: &Store, date: NaiveDate, out: &mut impl Write) -> Result<()> {
    let record = store
        .get(date)
        .with_context(|| format!("Failed to read count for {}", date_key(date)))?;

    match record.filter(|r| !r.is_empty()) {
        Some(DailyCount { date, count }) => {
            writeln!(out, "Kitemmuort count for {} is {}", date_key(date), count)?;
        }
        None => {
            writeln!(
                out,
                "No kitemmuorts set for {} yet. Want to add some?",
                date_key(date)
            )?;
        }
    }

    Ok(())
}
