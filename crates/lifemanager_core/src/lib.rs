//! Core data-access layer for LifeManager.
//! Typed collections over a keyed-blob store, the session provider, and the
//! aggregations the dashboard views are built from.

pub mod app;
pub mod config;
pub mod db;
pub mod insights;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::{LifeManager, StartupError, DEV_LOGIN_EMAIL, DEV_LOGIN_PASSWORD};
pub use config::{ConfigError, CoreConfig, LatencyProfile};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::investment::{InvestmentAsset, InvestmentPatch};
pub use model::record::{Collection, Entity, Record, RecordId};
pub use model::task::{Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::transaction::{Transaction, TransactionPatch, TransactionType};
pub use model::user::{SessionIdentity, UserProfile, UserProfilePatch};
pub use model::workout::{Workout, WorkoutPatch};
pub use repo::blob_repo::{BlobRepository, SqliteBlobRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::record_store::{RecordStore, Storage};
pub use service::{
    ExpenseService, InvestmentService, SessionProvider, TaskService, UserService, WorkoutService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
