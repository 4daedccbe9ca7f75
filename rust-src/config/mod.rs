//! Configuration and path constants for the counter.

mod settings;

pub use settings::{resolve_db_path, DATE_FORMAT, DB_PATH_ENV};
