//! Record the count for a date.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::DailyCount;
use crate::storage::Store;


/// Store `count` for `date`, replacing any earlier value.
pub fn run(store: &Store, date: NaiveDate, count: i64, out: &mut impl Write) -> Result<()> {
    let record = DailyCount::new(date, count);

    store
        .set(&record)
        .with_context(|| format!("Failed to set count for {}", record.date_key()))?;

    writeln!(out, "{} kitemmuorts set for {}", count, record.date_key())?;

    Ok(())
}
