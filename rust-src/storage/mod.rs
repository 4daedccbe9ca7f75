//! Storage layer for daily counts.

mod database;

pub use database::Store;
