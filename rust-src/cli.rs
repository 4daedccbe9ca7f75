//! CLI definitions using clap.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::commands;
use crate::config::{resolve_db_path, DATE_FORMAT, DB_PATH_ENV};
use crate::error::{CounterError, CounterResult};
use crate::models::{date_key, Mode};
use crate::storage::Store;


/// Long flags that may also be spelled with a single dash (`-count`).
const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["count", "set", "date"];


/// Kitemmuort counter - record how many kitemmuorts a day brought
#[derive(Parser, Debug)]
#[command(name = "kitemmuort-count")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "kitemmuort-count (-c|-s <N>) [-d <DATE>]")]
pub struct Cli {
    /// Show the kitemmuort count for a date (default is today)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    count: bool,

    /// Set the amount of kitemmuort for a date (default is today)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    set: Option<i64>,

    /// Operate on a specific date instead of today, as YYYY-MM-DD (example: 2012-10-01)
    #[arg(short, long, value_name = "DATE")]
    date: Option<String>,

    /// Store file to use instead of ~/.kitemmuort.db
    #[arg(long, value_name = "PATH", env = DB_PATH_ENV)]
    db: Option<PathBuf>,
}


/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub date: NaiveDate,
    pub mode: Mode,
    pub db_path: PathBuf,
}


impl Cli {
    /// Resolve the effective date, mode and store path.
    ///
    /// Fails on a malformed date before anything touches the store.
    pub fn into_options(self, today: NaiveDate) -> CounterResult<Options> {
        let date = parse_date(self.date.as_deref(), today)?;

        let mode = match self.set {
            Some(count) if count != 0 => Mode::Set(count),
            _ => Mode::Show,
        };

        if self.count && matches!(mode, Mode::Set(_)) {
            eprintln!("\x1b[33mEither use -count or -set, not both\x1b[0m");
        }

        Ok(Options {
            date,
            mode,
            db_path: resolve_db_path(self.db),
        })
    }
}


/// Parse a `YYYY-MM-DD` date, defaulting to `today` when absent.
///
/// Only the zero-padded form is accepted: input must read back unchanged.
pub fn parse_date(input: Option<&str>, today: NaiveDate) -> CounterResult<NaiveDate> {
    let Some(s) = input else {
        return Ok(today);
    };

    let invalid = |source: Option<chrono::ParseError>| CounterError::InvalidDate {
        input: s.to_string(),
        source,
    };

    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| invalid(Some(e)))?;

    if date_key(date) != s {
        return Err(invalid(None));
    }

    Ok(date)
}


/// Rewrite Go-style `-count`, `-set` and `-date` into their `--` forms.
///
/// Everything after a bare `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;

    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }

            let Some(s) = arg.to_str() else {
                return arg;
            };

            if s == "--" {
                after_separator = true;
                return arg;
            }

            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{s}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}


/// Run the selected command against the store.
pub fn execute(options: &Options, out: &mut impl Write) -> Result<()> {
    let store = Store::open(&options.db_path)?;

    store
        .ensure_schema()
        .with_context(|| format!("Failed to prepare database: {}", store.path().display()))?;

    match options.mode {
        Mode::Show => commands::show::run(&store, options.date, out),
        Mode::Set(count) => commands::set::run(&store, options.date, count, out),
    }
}


/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let options = cli.into_options(Local::now().date_naive())?;

    execute(&options, &mut io::stdout().lock())
}
