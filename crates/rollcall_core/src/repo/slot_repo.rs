//! Named slot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Read and overwrite opaque text values under a string key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Keys are non-empty after trimming.
//! - `write_slot` is all-or-nothing for the value it receives.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid slot key: `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for named durable slots.
pub trait SlotRepository {
    /// Returns the stored value, or `None` when the slot was never written.
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;
    /// Overwrites the slot with `value`.
    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Removes the slot; removing a missing slot is not an error.
    fn clear_slot(&self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed slot repository over the `kv_slots` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear_slot(&self, key: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{normalize_key, RepoError};

    #[test]
    fn normalize_key_trims_and_rejects_blank() {
        assert_eq!(normalize_key("  students ").unwrap(), "students");
        assert!(matches!(normalize_key("   "), Err(RepoError::InvalidKey(_))));
    }
}
