//! SQLite storage for contact submissions.
//!
//! A single append-only `contacts` table. Schema creation is idempotent and
//! runs every time a store is opened.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, Row};

use crate::model::{ContactForm, ContactSubmission};
use crate::{Error, Result};

/// Timestamp format written by SQLite's `CURRENT_TIMESTAMP` (always UTC).
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create the contacts table if it doesn't exist.
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_contacts_created_at ON contacts(created_at);
        "#,
    )
}

/// Durable store for contact submissions.
pub struct ContactStore {
    /// SQLite connection (protected by mutex for thread safety).
    conn: Mutex<Connection>,
}

impl ContactStore {
    /// Open or create the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        init_schema(&conn)?;

        tracing::info!(path = %path.display(), "contact store opened");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a submission and return its store-assigned id.
    ///
    /// The form is not validated here; that is the submission service's job.
    pub fn insert_contact(&self, form: &ContactForm) -> Result<i64> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO contacts (name, email, subject, message) VALUES (?, ?, ?, ?)",
            rusqlite::params![form.name, form.email, form.subject, form.message],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(id)
    }

    /// All submissions, newest first.
    ///
    /// Ordering compares `datetime(created_at)`, so RFC 3339 values written
    /// by other tools sort alongside SQLite's own timestamps.
    ///
    /// Rows that fail to decode are logged and skipped so that one bad row
    /// does not hide the rest.
    pub fn list_contacts(&self) -> Result<Vec<ContactSubmission>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, subject, message, created_at
             FROM contacts
             ORDER BY datetime(created_at) DESC, id DESC",
        )?;

        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            match decode_row(row) {
                Ok(contact) => contacts.push(contact),
                Err(e) => {
                    let id: Option<i64> = row.get(0).ok();
                    tracing::warn!(id = ?id, error = %e, "skipping undecodable contact row");
                }
            }
        }

        Ok(contacts)
    }

    /// Number of stored submissions.
    pub fn count_contacts(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Checkpoint the write-ahead log into the main database file.
    pub fn flush(&self) -> Result<()> {
        let conn = self.conn.lock();
        conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))
            .map_err(Error::Storage)
    }
}

fn decode_row(row: &Row<'_>) -> std::result::Result<ContactSubmission, DecodeError> {
    let raw_created_at: String = row.get(5)?;

    Ok(ContactSubmission {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        created_at: parse_timestamp(&raw_created_at)?,
    })
}

/// Parse a `created_at` column value.
///
/// Accepts SQLite's `CURRENT_TIMESTAMP` form as well as RFC 3339.
fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, DecodeError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, SQLITE_TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DecodeError::Timestamp(raw.to_string()))
}

/// Why a single row could not be turned into a [`ContactSubmission`].
#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("column error: {0}")]
    Column(#[from] rusqlite::Error),

    #[error("unparseable timestamp '{0}'")]
    Timestamp(String),
}
