//! Session/identity provider.
//!
//! # Responsibility
//! - Hold at most one signed-in identity for the process.
//! - Mirror it into storage so it survives restarts.
//!
//! # Invariants
//! - Signed-in in memory implies the identity was persisted first.
//! - `login` and `logout` run one at a time, so the in-memory identity always
//!   matches the persisted one once a transition completes.
//! - No credential is verified; this is a development stand-in.

use crate::config::simulate_latency;
use crate::model::record::SESSION_STORAGE_KEY;
use crate::model::user::SessionIdentity;
use crate::repo::blob_repo::{load_json, store_json};
use crate::repo::error::RepoResult;
use crate::repo::record_store::Storage;
use log::info;
use std::sync::{PoisonError, RwLock};
use tokio::sync::Mutex;

pub struct SessionProvider {
    storage: Storage,
    current: RwLock<Option<SessionIdentity>>,
    transition: Mutex<()>,
}

impl SessionProvider {
    /// Creates a signed-out provider. Call `init` to restore a prior session.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
            transition: Mutex::new(()),
        }
    }

    /// Restores the persisted identity, if any.
    ///
    /// Leaves the provider signed-out when nothing is persisted. A malformed
    /// persisted identity is reported as a serialization error.
    pub fn init(&self) -> RepoResult<Option<SessionIdentity>> {
        let restored: Option<SessionIdentity> =
            load_json(self.storage.blobs(), SESSION_STORAGE_KEY)?;
        self.set_current(restored.clone());

        info!(
            "event=session_init module=session status=ok restored={}",
            restored.is_some()
        );
        Ok(restored)
    }

    /// Signs in as the deterministic identity for `email`.
    ///
    /// `_password` is accepted and ignored.
    pub async fn login(&self, email: &str, _password: &str) -> RepoResult<SessionIdentity> {
        simulate_latency(self.storage.latency().login()).await;
        let _transition = self.transition.lock().await;

        let identity = SessionIdentity::for_email(email);
        store_json(self.storage.blobs(), SESSION_STORAGE_KEY, &identity)?;
        self.set_current(Some(identity.clone()));

        info!(
            "event=session_login module=session status=ok uid={}",
            identity.uid
        );
        Ok(identity)
    }

    /// Signs out and forgets the persisted identity.
    pub async fn logout(&self) -> RepoResult<()> {
        simulate_latency(self.storage.latency().logout()).await;
        let _transition = self.transition.lock().await;

        self.storage.blobs().remove(SESSION_STORAGE_KEY)?;
        self.set_current(None);

        info!("event=session_logout module=session status=ok");
        Ok(())
    }

    pub fn current_user(&self) -> Option<SessionIdentity> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Uid of the signed-in user; the owner filter for collection reads.
    pub fn current_uid(&self) -> Option<String> {
        self.current_user().map(|identity| identity.uid)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn set_current(&self, identity: Option<SessionIdentity>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = identity;
    }
}
