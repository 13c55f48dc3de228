//! Repository layer: keyed-blob persistence and typed record collections.
//!
//! # Responsibility
//! - Hide SQLite details behind a keyed-blob contract.
//! - Provide whole-collection read/replace CRUD over typed records.
//!
//! # Invariants
//! - Every mutation rewrites the complete collection blob.
//! - Read-modify-write sequences on one collection never interleave.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage and serialization errors.

pub mod blob_repo;
pub mod error;
pub mod record_store;
