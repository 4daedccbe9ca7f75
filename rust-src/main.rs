//! Kitemmuort counter
//!
//! Records and shows a daily count in a local SQLite file.

mod cli;
mod commands;
mod config;
mod error;
mod models;
mod storage;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
