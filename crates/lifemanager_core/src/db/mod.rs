//! Embedded store backing the collection blobs.
//!
//! The schema is one `blobs` table keyed by logical storage key (`pm_tasks`,
//! `pm_current_user`, ...). Each row holds a complete JSON payload plus the
//! epoch-millisecond time it was last replaced. Nothing else is stored in
//! SQLite; record identity and ordering live inside the payloads.
//!
//! `open_db`/`open_db_in_memory` hand out connections only after every
//! migration in `migrations` has been applied and `PRAGMA user_version`
//! matches the newest one this build knows.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
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
