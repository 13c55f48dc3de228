//! Keyed-blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load, replace and remove one serialized payload per logical key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `store` replaces the whole payload for a key in one statement.
//! - The connection lock is never held beyond a single call.

use super::error::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Storage contract for whole-value blobs addressed by key.
pub trait BlobRepository: Send + Sync {
    /// Returns the payload under `key`, or `None` when never written.
    fn load(&self, key: &str) -> RepoResult<Option<String>>;
    /// Replaces the payload under `key`.
    fn store(&self, key: &str, payload: &str) -> RepoResult<()>;
    /// Removes `key`; removing an absent key succeeds.
    fn remove(&self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed blob repository owning its connection.
pub struct SqliteBlobRepository {
    conn: Mutex<Connection>,
}

impl SqliteBlobRepository {
    /// Wraps a connection returned by `db::open_db*` (migrations applied).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::StoragePoisoned)
    }
}

impl BlobRepository for SqliteBlobRepository {
    fn load(&self, key: &str) -> RepoResult<Option<String>> {
        let conn = self.conn()?;
        let payload = conn
            .query_row(
                "SELECT payload FROM blobs WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn store(&self, key: &str, payload: &str) -> RepoResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO blobs (key, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM blobs WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Loads and decodes the JSON value under `key`.
pub fn load_json<T: DeserializeOwned>(
    blobs: &dyn BlobRepository,
    key: &'static str,
) -> RepoResult<Option<T>> {
    match blobs.load(key)? {
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .map_err(|source| RepoError::Serialization { key, source }),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and replaces the payload under `key`.
pub fn store_json<T: Serialize + ?Sized>(
    blobs: &dyn BlobRepository,
    key: &'static str,
    value: &T,
) -> RepoResult<()> {
    let payload =
        serde_json::to_string(value).map_err(|source| RepoError::Serialization { key, source })?;
    blobs.store(key, &payload)
}
