//! Error types for the counter.

use std::io;
use std::path::PathBuf;

use thiserror::Error;


/// Errors raised while resolving input or touching the store.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Error parsing the date '{input}', is it in YYYY-MM-DD format?")]
    InvalidDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Cannot access store file {}", .path.display())]
    StoreAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}


pub type CounterResult<T> = Result<T, CounterError>;
