//! Domain services.
//!
//! # Responsibility
//! - Bind one record store to each collection.
//! - Own the session lifecycle.
//!
//! # Invariants
//! - Services add no behavior beyond their collection binding; all CRUD
//!   semantics live in `repo::record_store`.

pub mod session_service;

use crate::model::investment::InvestmentAsset;
use crate::model::task::Task;
use crate::model::transaction::Transaction;
use crate::model::user::UserProfile;
use crate::model::workout::Workout;
use crate::repo::record_store::RecordStore;

pub use session_service::SessionProvider;

pub type UserService = RecordStore<UserProfile>;
pub type TaskService = RecordStore<Task>;
pub type ExpenseService = RecordStore<Transaction>;
pub type WorkoutService = RecordStore<Workout>;
pub type InvestmentService = RecordStore<InvestmentAsset>;
