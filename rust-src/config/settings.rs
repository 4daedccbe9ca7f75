//! Application settings and path constants.

use std::path::PathBuf;


/// File name of the store, placed in the user's home directory.
pub const DB_FILE_NAME: &str = ".kitemmuort.db";

/// Layout dates are parsed from and stored as.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable overriding the store location.
pub const DB_PATH_ENV: &str = "KITEMMUORT_DB";

/// Home directory variables, most specific first.
const HOME_VARS: [&str; 2] = ["HOMEPATH", "HOME"];


/// Find the home directory from environment-style lookups.
///
/// `HOMEPATH` wins over `HOME`; empty values are treated as unset.
pub fn home_dir_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    HOME_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}


/// Get the store path.
///
/// An explicit path is used as is. Otherwise the store lives in the home
/// directory, falling back to the working directory when no home can be
/// found.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    match home_dir_from(|var| std::env::var(var).ok()).or_else(dirs::home_dir) {
        Some(home) => home.join(DB_FILE_NAME),
        None => {
            eprintln!(
                "\x1b[33mWarning: no home directory found, using ./{} instead\x1b[0m",
                DB_FILE_NAME
            );
            PathBuf::from(DB_FILE_NAME)
        }
    }
}
