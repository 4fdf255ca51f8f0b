//! Jouster Storage Layer
//!
//! Implements the [`RecordStore`] trait on SQLite.
//!
//! # Architecture
//!
//! - `analysis_records` holds one row per record (id, timestamp, title, sentiment)
//! - `record_topics` and `record_keywords` hold list values, one row per entry,
//!   so values containing commas or any other character round-trip unchanged
//! - Each insert is a single transaction; readers never see a partial record
//!
//! # Examples
//!
//! ```no_run
//! use jouster_domain::{NewRecord, RecordStore};
//! use jouster_store::SqliteStore;
//!
//! let store = SqliteStore::open_in_memory().unwrap();
//! let record = store.insert(NewRecord {
//!     title: Some("Launch".into()),
//!     topics: vec!["space".into(), "rockets".into(), "nasa".into()],
//!     sentiment: Some("positive".into()),
//!     keywords: vec!["rocket".into()],
//! }).unwrap();
//! assert_eq!(store.find_by_topic_substring("rock").unwrap()[0].id, record.id);
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, SubsecRound, Utc};
use jouster_domain::{AnalysisRecord, NewRecord, RecordId, RecordStore};
use rusqlite::{params, Connection, Params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

/// Where a database lives, as named by a `DATABASE_URL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Private in-memory database, gone when the store is dropped
    InMemory,
    /// Database file on disk
    File(PathBuf),
}

impl DatabaseLocation {
    /// Interpret a database URL
    ///
    /// Accepts `sqlite::memory:`, `:memory:`, `sqlite://<path>`, `sqlite:<path>`
    /// or a bare filesystem path.
    ///
    /// ```
    /// use jouster_store::DatabaseLocation;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(DatabaseLocation::from_url("sqlite::memory:"), DatabaseLocation::InMemory);
    /// assert_eq!(
    ///     DatabaseLocation::from_url("sqlite://data/jouster.db"),
    ///     DatabaseLocation::File(PathBuf::from("data/jouster.db"))
    /// );
    /// ```
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        if path == ":memory:" {
            DatabaseLocation::InMemory
        } else {
            DatabaseLocation::File(PathBuf::from(path))
        }
    }
}

/// SQLite-based implementation of [`RecordStore`]
///
/// # Thread Safety
///
/// The connection sits behind a mutex held for the duration of one
/// operation, so a single store can be shared across tasks. Calls block;
/// async callers should run them on a blocking thread.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

/// Scalar columns of one record row
struct RecordRow {
    id: RecordId,
    created_date: DateTime<Utc>,
    title: Option<String>,
    sentiment: Option<String>,
}

const SELECT_RECORDS: &str = "SELECT r.id, r.created_date, r.title, r.sentiment FROM analysis_records r";

impl SqliteStore {
    /// Open (or create) a database file at `path`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jouster_store::SqliteStore;
    ///
    /// let store = SqliteStore::open("jouster.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        info!("Opened record store at {}", path.as_ref().display());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Open the database named by a `DATABASE_URL`
    pub fn from_database_url(url: &str) -> Result<Self, StoreError> {
        match DatabaseLocation::from_url(url) {
            DatabaseLocation::InMemory => Self::open_in_memory(),
            DatabaseLocation::File(path) => Self::open(path),
        }
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Run a record query and attach each record's topics and keywords
    fn query_records<P: Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, |row| {
                Ok(RecordRow {
                    id: row.get(0)?,
                    created_date: row.get(1)?,
                    title: row.get(2)?,
                    sentiment: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|row| Self::hydrate(conn, row))
            .collect()
    }

    fn hydrate(conn: &Connection, row: RecordRow) -> Result<AnalysisRecord, StoreError> {
        let topics = Self::load_list(
            conn,
            "SELECT topic FROM record_topics WHERE record_id = ?1 ORDER BY position",
            row.id,
        )?;
        let keywords = Self::load_list(
            conn,
            "SELECT keyword FROM record_keywords WHERE record_id = ?1 ORDER BY position",
            row.id,
        )?;

        Ok(AnalysisRecord {
            id: row.id,
            created_date: row.created_date,
            title: row.title,
            topics,
            sentiment: row.sentiment,
            keywords,
        })
    }

    fn load_list(conn: &Connection, sql: &str, id: RecordId) -> Result<Vec<String>, StoreError> {
        let mut stmt = conn.prepare_cached(sql)?;
        let values = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn insert(&self, record: NewRecord) -> Result<AnalysisRecord, Self::Error> {
        let created_date = Utc::now().trunc_subsecs(6);

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO analysis_records (created_date, title, sentiment) VALUES (?1, ?2, ?3)",
            params![created_date, record.title, record.sentiment],
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO record_topics (record_id, position, topic, topic_folded)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (position, topic) in record.topics.iter().enumerate() {
                stmt.execute(params![id, position as i64, topic, topic.to_lowercase()])?;
            }

            let mut stmt = tx.prepare_cached(
                "INSERT INTO record_keywords (record_id, position, keyword) VALUES (?1, ?2, ?3)",
            )?;
            for (position, keyword) in record.keywords.iter().enumerate() {
                stmt.execute(params![id, position as i64, keyword])?;
            }
        }

        tx.commit()?;
        debug!("Inserted record {}", id);

        Ok(AnalysisRecord {
            id,
            created_date,
            title: record.title,
            topics: record.topics,
            sentiment: record.sentiment,
            keywords: record.keywords,
        })
    }

    fn find_by_topic_substring(&self, needle: &str) -> Result<Vec<AnalysisRecord>, Self::Error> {
        let folded = needle.to_lowercase();
        let conn = self.lock()?;

        // instr() is a plain substring test: % and _ match themselves
        let sql = format!(
            "{SELECT_RECORDS} WHERE EXISTS (
                 SELECT 1 FROM record_topics t
                 WHERE t.record_id = r.id AND instr(t.topic_folded, ?1) > 0
             ) ORDER BY r.id"
        );
        let records = Self::query_records(&conn, &sql, params![folded])?;
        debug!("Topic search '{}' matched {} records", needle, records.len());
        Ok(records)
    }

    fn list_all(&self) -> Result<Vec<AnalysisRecord>, Self::Error> {
        let conn = self.lock()?;
        let sql = format!("{SELECT_RECORDS} ORDER BY r.id");
        Self::query_records(&conn, &sql, [])
    }

    fn count(&self) -> Result<usize, Self::Error> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM analysis_records", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_url() {
        assert_eq!(DatabaseLocation::from_url(":memory:"), DatabaseLocation::InMemory);
        assert_eq!(DatabaseLocation::from_url("sqlite::memory:"), DatabaseLocation::InMemory);
        assert_eq!(
            DatabaseLocation::from_url("sqlite:local.db"),
            DatabaseLocation::File(PathBuf::from("local.db"))
        );
        assert_eq!(
            DatabaseLocation::from_url("sqlite:///var/lib/jouster.db"),
            DatabaseLocation::File(PathBuf::from("/var/lib/jouster.db"))
        );
        assert_eq!(
            DatabaseLocation::from_url("  ./jouster.db "),
            DatabaseLocation::File(PathBuf::from("./jouster.db"))
        );
    }

    #[test]
    fn test_schema_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        let conn = store.lock().unwrap();
        conn.execute_batch(include_str!("schema.sql")).unwrap();
    }

    #[test]
    fn test_failed_insert_leaves_nothing_behind() {
        let store = SqliteStore::open_in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute_batch("DROP TABLE record_keywords").unwrap();
        }

        let result = store.insert(NewRecord {
            title: None,
            topics: vec!["a".into()],
            sentiment: None,
            keywords: vec!["k".into()],
        });

        assert!(matches!(result, Err(StoreError::Database(_))));
        assert_eq!(store.count().unwrap(), 0);
        let conn = store.lock().unwrap();
        let topics: i64 = conn
            .query_row("SELECT COUNT(*) FROM record_topics", [], |row| row.get(0))
            .unwrap();
        assert_eq!(topics, 0);
    }
}
