//! User profile records and the session identity.
//!
//! # Invariants
//! - `SessionIdentity::for_email` is deterministic: the same email (ignoring
//!   case and surrounding whitespace) always yields the same uid.

use super::record::{Collection, Entity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row of the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserProfilePatch {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Entity for UserProfile {
    const COLLECTION: Collection = Collection::Users;
    type Patch = UserProfilePatch;

    fn apply_patch(&mut self, patch: UserProfilePatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
    }
}

/// The signed-in user held by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl SessionIdentity {
    /// Fabricates the development identity for `email`.
    ///
    /// No credential is checked; the uid is a name-based UUID of the
    /// normalized email.
    pub fn for_email(email: &str) -> Self {
        let normalized = email.trim().to_ascii_lowercase();
        let uid = Uuid::new_v5(&Uuid::NAMESPACE_OID, normalized.as_bytes());
        let display_name = match normalized.split_once('@') {
            Some((local, _)) if !local.is_empty() => capitalize(local),
            _ => capitalize(&normalized),
        };

        Self {
            uid: uid.to_string(),
            email: email.trim().to_string(),
            display_name,
            email_verified: true,
        }
    }

    /// Profile row mirroring this identity.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::SessionIdentity;

    #[test]
    fn identity_is_deterministic_per_normalized_email() {
        let first = SessionIdentity::for_email("augustus@example.com");
        let second = SessionIdentity::for_email("  Augustus@Example.com ");

        assert_eq!(first.uid, second.uid);
        assert_eq!(first.display_name, "Augustus");
        assert!(first.email_verified);
        assert_ne!(first.uid, SessionIdentity::for_email("other@example.com").uid);
    }

    #[test]
    fn identity_without_local_part_falls_back_to_whole_email() {
        let identity = SessionIdentity::for_email("@host");
        assert_eq!(identity.display_name, "@host");
    }
}
