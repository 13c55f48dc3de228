//! Typed domain model for the life-management collections.
//!
//! # Responsibility
//! - Define the stored record envelope shared by every collection.
//! - Define one explicitly-fielded entity per collection.
//!
//! # Invariants
//! - Every stored record is identified by a `RecordId` unique in its collection.
//! - The owner id on a record is a filter, never an access boundary.

pub mod investment;
pub mod record;
pub mod task;
pub mod transaction;
pub mod user;
pub mod workout;
