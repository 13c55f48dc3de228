//! Pure aggregations over collection snapshots.
//!
//! # Responsibility
//! - Derive totals, breakdowns and orderings for display.
//!
//! # Invariants
//! - Functions never touch storage and are deterministic for a given input
//!   (the `*_today`/`*_now` helpers only add a clock read).
//! - Results are recomputed per read; nothing is cached or persisted.

pub mod briefing;
pub mod health;
pub mod ledger;
pub mod portfolio;
pub mod tasks;
