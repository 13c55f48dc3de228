//! Record envelope and collection binding.
//!
//! # Responsibility
//! - Wrap entity fields with identity, ownership and lifecycle timestamps.
//! - Name the storage key each entity kind lives under.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once, at creation.
//! - `updated_at` is only set by an explicit update.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one stored record.
pub type RecordId = Uuid;

/// Storage key holding the signed-in identity.
pub const SESSION_STORAGE_KEY: &str = "pm_current_user";

/// Logical collections persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Users,
    Tasks,
    Transactions,
    Workouts,
    Investments,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Tasks,
        Collection::Transactions,
        Collection::Workouts,
        Collection::Investments,
    ];

    /// Key of the blob that holds this collection.
    ///
    /// Transactions keep the historical `pm_expenses` key so existing blobs
    /// stay readable.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Users => "pm_users",
            Self::Tasks => "pm_tasks",
            Self::Transactions => "pm_expenses",
            Self::Workouts => "pm_workouts",
            Self::Investments => "pm_investments",
        }
    }

    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tasks => "tasks",
            Self::Transactions => "transactions",
            Self::Workouts => "workouts",
            Self::Investments => "investments",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain fields of one collection.
///
/// The implementing type is flattened into the stored record, so its
/// serialized field names must not collide with the envelope fields
/// (`id`, `userId`, `createdAt`, `updatedAt`).
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this entity is stored in.
    const COLLECTION: Collection;

    /// Partial field set accepted by update.
    type Patch: Send;

    /// Merges `patch` over `self`; absent patch fields are left untouched.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// One persisted entity instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    pub id: RecordId,
    /// Owning user uid. Used only to filter `get_all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    /// Creates a record with a fresh random id, stamped now.
    pub fn new(user_id: Option<String>, fields: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            updated_at: None,
            fields,
        }
    }

    /// Returns whether this record's owner field equals `owner`.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.user_id.as_deref() == Some(owner)
    }
}

impl<T: Entity> Record<T> {
    /// Merges `patch` into the entity fields and stamps `updated_at`.
    pub fn merge(&mut self, patch: T::Patch, at: DateTime<Utc>) {
        self.fields.apply_patch(patch);
        self.updated_at = Some(at);
    }
}

/// Deserializes a present field (including `null`) as `Some(value)`.
///
/// Paired with `#[serde(default)]` this distinguishes an absent patch field
/// (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
