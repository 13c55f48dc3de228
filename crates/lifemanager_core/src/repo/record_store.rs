//! Generic whole-collection record store.
//!
//! # Responsibility
//! - Provide async CRUD over one typed collection persisted as a JSON array.
//! - Assign ids and creation timestamps; stamp update timestamps.
//!
//! # Invariants
//! - `get_all` preserves insertion order.
//! - `update` on a missing id fails with `NotFound`; `delete` on a missing id
//!   succeeds without writing.
//! - Mutations on one collection are serialized through that collection's
//!   gate, shared by every store cloned from the same `Storage`.
//! - Record contents never reach the logs; only ids and counts do.

use super::blob_repo::{load_json, store_json, BlobRepository, SqliteBlobRepository};
use super::error::{RepoError, RepoResult};
use crate::config::{simulate_latency, LatencyProfile};
use crate::model::record::{Collection, Entity, Record, RecordId};
use chrono::Utc;
use log::{debug, info};
use rusqlite::Connection;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// One async gate per collection.
struct CollectionLocks {
    users: Mutex<()>,
    tasks: Mutex<()>,
    transactions: Mutex<()>,
    workouts: Mutex<()>,
    investments: Mutex<()>,
}

impl CollectionLocks {
    fn new() -> Self {
        Self {
            users: Mutex::new(()),
            tasks: Mutex::new(()),
            transactions: Mutex::new(()),
            workouts: Mutex::new(()),
            investments: Mutex::new(()),
        }
    }

    fn gate(&self, collection: Collection) -> &Mutex<()> {
        match collection {
            Collection::Users => &self.users,
            Collection::Tasks => &self.tasks,
            Collection::Transactions => &self.transactions,
            Collection::Workouts => &self.workouts,
            Collection::Investments => &self.investments,
        }
    }
}

struct StorageInner {
    blobs: Arc<dyn BlobRepository>,
    locks: CollectionLocks,
    latency: LatencyProfile,
}

/// Shared storage handle: blob repository, per-collection gates, latency.
///
/// Cloning is cheap and every clone shares the same gates.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

impl Storage {
    pub fn new(blobs: Arc<dyn BlobRepository>, latency: LatencyProfile) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                blobs,
                locks: CollectionLocks::new(),
                latency,
            }),
        }
    }

    /// Storage over a migrated SQLite connection.
    pub fn sqlite(conn: Connection, latency: LatencyProfile) -> Self {
        Self::new(Arc::new(SqliteBlobRepository::new(conn)), latency)
    }

    pub fn blobs(&self) -> &dyn BlobRepository {
        self.inner.blobs.as_ref()
    }

    pub fn latency(&self) -> LatencyProfile {
        self.inner.latency
    }

    /// Store bound to the collection of `T`.
    pub fn records<T: Entity>(&self) -> RecordStore<T> {
        RecordStore::new(self.clone())
    }

    fn gate(&self, collection: Collection) -> &Mutex<()> {
        self.inner.locks.gate(collection)
    }
}

/// Async CRUD over the collection of entity `T`.
pub struct RecordStore<T: Entity> {
    storage: Storage,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.storage.clone())
    }
}

impl<T: Entity> RecordStore<T> {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            _entity: PhantomData,
        }
    }

    pub fn collection(&self) -> Collection {
        T::COLLECTION
    }

    /// Returns all records, or only those owned by `owner`.
    ///
    /// An empty owner string is treated like no owner filter.
    pub async fn get_all(&self, owner: Option<&str>) -> RepoResult<Vec<Record<T>>> {
        simulate_latency(self.storage.latency().record()).await;
        let records = self.read_all()?;
        let records = match owner.filter(|owner| !owner.is_empty()) {
            Some(owner) => records
                .into_iter()
                .filter(|record| record.is_owned_by(owner))
                .collect(),
            None => records,
        };

        debug!(
            "event=record_list module=repo status=ok collection={} count={} owner_filter={}",
            T::COLLECTION,
            records.len(),
            owner.is_some_and(|owner| !owner.is_empty())
        );
        Ok(records)
    }

    /// Returns the record with `id`, or `None` when absent.
    pub async fn get_by_id(&self, id: RecordId) -> RepoResult<Option<Record<T>>> {
        simulate_latency(self.storage.latency().record()).await;
        let record = self.read_all()?.into_iter().find(|record| record.id == id);

        debug!(
            "event=record_get module=repo status=ok collection={} id={} found={}",
            T::COLLECTION,
            id,
            record.is_some()
        );
        Ok(record)
    }

    /// Appends a new record with a fresh id and creation timestamp.
    pub async fn create(&self, owner: Option<&str>, fields: T) -> RepoResult<Record<T>> {
        simulate_latency(self.storage.latency().record()).await;
        let started_at = Instant::now();
        let _gate = self.storage.gate(T::COLLECTION).lock().await;

        let mut records = self.read_all()?;
        let record = Record::new(owner.map(str::to_owned), fields);
        records.push(record.clone());
        self.write_all(&records)?;

        info!(
            "event=record_create module=repo status=ok collection={} id={} count={} duration_ms={}",
            T::COLLECTION,
            record.id,
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(record)
    }

    /// Merges `patch` over the record with `id` and stamps `updated_at`.
    ///
    /// The owner field is not checked.
    pub async fn update(&self, id: RecordId, patch: T::Patch) -> RepoResult<Record<T>> {
        simulate_latency(self.storage.latency().record()).await;
        let started_at = Instant::now();
        let _gate = self.storage.gate(T::COLLECTION).lock().await;

        let mut records = self.read_all()?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            info!(
                "event=record_update module=repo status=error collection={} id={} error_code=not_found",
                T::COLLECTION,
                id
            );
            return Err(RepoError::NotFound {
                collection: T::COLLECTION,
                id,
            });
        };
        record.merge(patch, Utc::now());
        let updated = record.clone();
        self.write_all(&records)?;

        info!(
            "event=record_update module=repo status=ok collection={} id={} duration_ms={}",
            T::COLLECTION,
            id,
            started_at.elapsed().as_millis()
        );
        Ok(updated)
    }

    /// Removes the record with `id`; absent ids are a no-op.
    ///
    /// The owner field is not checked.
    pub async fn delete(&self, id: RecordId) -> RepoResult<()> {
        simulate_latency(self.storage.latency().record()).await;
        let _gate = self.storage.gate(T::COLLECTION).lock().await;

        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        let removed = before - records.len();
        if removed > 0 {
            self.write_all(&records)?;
        }

        info!(
            "event=record_delete module=repo status=ok collection={} id={} removed={}",
            T::COLLECTION,
            id,
            removed
        );
        Ok(())
    }

    fn read_all(&self) -> RepoResult<Vec<Record<T>>> {
        let records = load_json(self.storage.blobs(), T::COLLECTION.storage_key())?;
        Ok(records.unwrap_or_default())
    }

    fn write_all(&self, records: &[Record<T>]) -> RepoResult<()> {
        store_json(self.storage.blobs(), T::COLLECTION.storage_key(), records)
    }
}
