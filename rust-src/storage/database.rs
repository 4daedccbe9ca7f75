//! SQLite store holding one count per date.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::config::DATE_FORMAT;
use crate::error::{CounterError, CounterResult};
use crate::models::{date_key, DailyCount};


/// Open connection to the counter database.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}


impl Store {
    /// Open the store at `path`, creating an empty file first if needed.
    ///
    /// Missing parent directories are not created.
    pub fn open(path: &Path) -> CounterResult<Self> {
        let access_error = |source: io::Error| CounterError::StoreAccess {
            path: path.to_path_buf(),
            source,
        };

        match fs::metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                File::create(path).map_err(access_error)?;
            }
            Err(e) => return Err(access_error(e)),
        }

        let conn = Connection::open(path)?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the counts table unless it can already be read.
    pub fn ensure_schema(&self) -> CounterResult<()> {
        if self.table_exists() {
            return Ok(());
        }

        self.create_table()
    }

    /// An "already exists" failure is reported and ignored.
    fn create_table(&self) -> CounterResult<()> {
        let result = self.conn.execute(
            "CREATE TABLE kitemmuorts(date TEXT, count INTEGER, UNIQUE (date))",
            [],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains("already exists") => {
                eprintln!("\x1b[33mWarning: {e}\x1b[0m");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Any failure to read the table counts as the table being absent.
    fn table_exists(&self) -> bool {
        self.conn.prepare("SELECT * FROM kitemmuorts").is_ok()
    }

    /// Get the count stored for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> CounterResult<Option<DailyCount>> {
        let row: Option<(String, i64)> = self
            .conn
            .query_row(
                "SELECT date, count FROM kitemmuorts WHERE date = ?1",
                params![date_key(date)],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        row.map(|(stored, count)| {
            NaiveDate::parse_from_str(&stored, DATE_FORMAT)
                .map(|date| DailyCount::new(date, count))
                .map_err(|source| CounterError::InvalidDate {
                    input: stored,
                    source: Some(source),
                })
        })
        .transpose()
    }

    /// Insert the count for its date, replacing any previous value.
    pub fn set(&self, record: &DailyCount) -> CounterResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kitemmuorts(date, count) VALUES(?1, ?2)",
            params![record.date_key(), record.count],
        )?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_test_store(tmp_dir: &TempDir) -> Store {
        let store = Store::open(&tmp_dir.path().join("test.db")).unwrap();
        store.ensure_schema().unwrap();
        store
    }

    fn row_count(store: &Store) -> i64 {
        store
            .conn
            .query_row("SELECT COUNT(*) FROM kitemmuorts", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_open_creates_file() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("test.db");

        let store = Store::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(store.path(), db_path.as_path());
    }

    #[test]
    fn test_open_fails_without_parent_dir() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("missing").join("test.db");

        let err = Store::open(&db_path).err().unwrap();
        assert!(matches!(err, CounterError::StoreAccess { .. }));
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let tmp_dir = TempDir::new().unwrap();
        let store = open_test_store(&tmp_dir);
        store.set(&DailyCount::new(date(2020, 5, 1), 5)).unwrap();

        store.ensure_schema().unwrap();
        drop(store);

        let reopened = open_test_store(&tmp_dir);
        assert_eq!(
            reopened.get(date(2020, 5, 1)).unwrap(),
            Some(DailyCount::new(date(2020, 5, 1), 5))
        );
    }

    #[test]
    fn test_get_missing_date() {
        let tmp_dir = TempDir::new().unwrap();
        let store = open_test_store(&tmp_dir);

        assert_eq!(store.get(date(1999, 1, 1)).unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let tmp_dir = TempDir::new().unwrap();
        let store = open_test_store(&tmp_dir);

        store.set(&DailyCount::new(date(2020, 5, 1), 5)).unwrap();
        store.set(&DailyCount::new(date(2020, 5, 2), 7)).unwrap();

        assert_eq!(store.get(date(2020, 5, 1)).unwrap().map(|r| r.count), Some(5));
        assert_eq!(store.get(date(2020, 5, 2)).unwrap().map(|r| r.count), Some(7));
    }

    #[test]
    fn test_set_overwrites_same_date() {
        let tmp_dir = TempDir::new().unwrap();
        let store = open_test_store(&tmp_dir);

        store.set(&DailyCount::new(date(2021, 3, 14), 2)).unwrap();
        store.set(&DailyCount::new(date(2021, 3, 14), 9)).unwrap();

        assert_eq!(row_count(&store), 1);
        assert_eq!(store.get(date(2021, 3, 14)).unwrap().map(|r| r.count), Some(9));
    }

    #[test]
    fn test_create_existing_table_is_not_fatal() {
        let tmp_dir = TempDir::new().unwrap();
        let store = open_test_store(&tmp_dir);
        store.set(&DailyCount::new(date(2020, 5, 1), 5)).unwrap();

        store.create_table().unwrap();

        assert_eq!(row_count(&store), 1);
        assert_eq!(store.get(date(2020, 5, 1)).unwrap().map(|r| r.count), Some(5));
    }

    #[test]
    fn test_table_created_by_other_connection() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("test.db");
        let store = Store::open(&db_path).unwrap();

        let other = Connection::open(&db_path).unwrap();
        other
            .execute(
                "CREATE TABLE kitemmuorts(date TEXT, count INTEGER, UNIQUE (date))",
                [],
            )
            .unwrap();
        other
            .execute("INSERT INTO kitemmuorts(date, count) VALUES('2020-05-01', 3)", [])
            .unwrap();

        store.ensure_schema().unwrap();
        assert_eq!(store.get(date(2020, 5, 1)).unwrap().map(|r| r.count), Some(3));
    }
}
