//! Explicit current-user context
//!
//! Engines receive a [`Session`] at construction instead of reading the
//! signed-in user from shared storage. An anonymous session disables every
//! user-scoped side effect (play counts, feed persistence, notification
//! derivation) without raising an error.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User identifier
    pub id: UserId,

    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Current-user context shared by the playback and notification engines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<CurrentUser>,
}

impl Session {
    /// Session without a resolvable user
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Session for a signed-in user
    pub fn signed_in(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self::from_user(CurrentUser {
            id: id.into(),
            name: name.into(),
        })
    }

    /// Session from a resolved user record
    ///
    /// A record with an empty id is treated as anonymous.
    pub fn from_user(user: CurrentUser) -> Self {
        if user.id.is_empty() {
            return Self::anonymous();
        }
        Self { user: Some(user) }
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// The signed-in user's id, if any
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }

    /// Whether `id` names the signed-in user
    pub fn is_current(&self, id: &UserId) -> bool {
        self.user_id() == Some(id)
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
