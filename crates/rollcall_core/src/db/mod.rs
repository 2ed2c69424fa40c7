//! SQLite file backing the roster's durable mirror.
//!
//! # Responsibility
//! - Hand out connections whose `kv_slots` table is ready for slot reads
//!   and writes.
//! - Refuse roster files written by a newer build.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - `SqliteSlotRepository` only ever sees fully migrated connections.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to open or prepare the roster database.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected a statement or could not open the file.
    Sqlite(rusqlite::Error),
    /// The roster file carries a schema this build does not know.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "roster database error: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "roster file uses schema version {found}; this build understands up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
