//! Composition root.
//!
//! # Responsibility
//! - Open storage from configuration and build every service over it.
//! - Own the session provider and restore it at start.
//!
//! # Invariants
//! - All services of one `LifeManager` share one `Storage`, so per-collection
//!   gates are shared too.
//! - `LifeManager::from_storage` always runs `SessionProvider::init`.

use crate::config::{CoreConfig, LatencyProfile};
use crate::db::{open_db, open_db_in_memory};
use crate::insights::briefing::MorningBriefing;
use crate::logging::init_logging;
use crate::model::record::Record;
use crate::model::user::{SessionIdentity, UserProfile};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::record_store::Storage;
use crate::service::{
    ExpenseService, InvestmentService, SessionProvider, TaskService, UserService, WorkoutService,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity signed in automatically by development front ends.
pub const DEV_LOGIN_EMAIL: &str = "augustus@example.com";
pub const DEV_LOGIN_PASSWORD: &str = "password";

#[derive(Debug)]
pub enum StartupError {
    Logging(String),
    Repo(RepoError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StartupError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub struct LifeManager {
    storage: Storage,
    users: UserService,
    tasks: TaskService,
    expenses: ExpenseService,
    workouts: WorkoutService,
    investments: InvestmentService,
    session: SessionProvider,
}

impl LifeManager {
    /// Starts logging (when `log_dir` is set), opens storage and restores
    /// the session.
    pub fn open(config: &CoreConfig) -> Result<Self, StartupError> {
        if let Some(log_dir) = config.log_dir.as_deref() {
            init_logging(config.effective_log_level(), log_dir).map_err(StartupError::Logging)?;
        }

        let conn = match config.db_path.as_deref() {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
        .map_err(RepoError::from)?;

        Ok(Self::from_storage(Storage::sqlite(conn, config.latency))?)
    }

    /// In-memory instance without artificial latency.
    pub fn in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Self::from_storage(Storage::sqlite(conn, LatencyProfile::none()))
    }

    pub fn from_storage(storage: Storage) -> RepoResult<Self> {
        let session = SessionProvider::new(storage.clone());
        session.init()?;

        Ok(Self {
            users: storage.records(),
            tasks: storage.records(),
            expenses: storage.records(),
            workouts: storage.records(),
            investments: storage.records(),
            session,
            storage,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    pub fn expenses(&self) -> &ExpenseService {
        &self.expenses
    }

    pub fn workouts(&self) -> &WorkoutService {
        &self.workouts
    }

    pub fn investments(&self) -> &InvestmentService {
        &self.investments
    }

    pub fn session(&self) -> &SessionProvider {
        &self.session
    }

    /// Returns the current identity, signing in as `email` when signed-out.
    ///
    /// A fresh sign-in also mirrors the identity into the `users` collection.
    pub async fn ensure_signed_in(&self, email: &str) -> RepoResult<SessionIdentity> {
        if let Some(identity) = self.session.current_user() {
            return Ok(identity);
        }

        let identity = self.session.login(email, DEV_LOGIN_PASSWORD).await?;
        self.register_profile(&identity).await?;
        Ok(identity)
    }

    /// Returns the profile row owned by `identity`, creating it when absent.
    pub async fn register_profile(
        &self,
        identity: &SessionIdentity,
    ) -> RepoResult<Record<UserProfile>> {
        let owned = self.users.get_all(Some(identity.uid.as_str())).await?;
        match owned.into_iter().next() {
            Some(existing) => Ok(existing),
            None => {
                self.users
                    .create(Some(identity.uid.as_str()), identity.profile())
                    .await
            }
        }
    }

    /// Today's briefing for the signed-in user; empty when signed-out.
    pub async fn morning_briefing(&self) -> RepoResult<MorningBriefing> {
        let Some(uid) = self.session.current_uid() else {
            return Ok(MorningBriefing::default());
        };

        let tasks = self.tasks.get_all(Some(uid.as_str())).await?;
        let transactions = self.expenses.get_all(Some(uid.as_str())).await?;
        Ok(MorningBriefing::today(&tasks, &transactions))
    }
}
