//! Error type shared by blob and record repositories.

use crate::db::DbError;
use crate::model::record::{Collection, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Update targeted an id absent from the collection.
    NotFound { collection: Collection, id: RecordId },
    /// Persisted blob could not be decoded, or a value could not be encoded.
    Serialization {
        key: &'static str,
        source: serde_json::Error,
    },
    /// A thread panicked while holding the storage connection.
    StoragePoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => {
                write!(f, "record not found in {collection}: {id}")
            }
            Self::Serialization { key, source } => {
                write!(f, "invalid persisted data under `{key}`: {source}")
            }
            Self::StoragePoisoned => write!(f, "storage connection lock is poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization { source, .. } => Some(source),
            Self::NotFound { .. } | Self::StoragePoisoned => None,
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
