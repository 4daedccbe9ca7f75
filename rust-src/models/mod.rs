//! Data models for the counter.

mod daily_count;

pub use daily_count::{DailyCount, Mode};
pub(crate) use daily_count::date_key;
