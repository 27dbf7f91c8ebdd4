//! Current-user resolution
//!
//! The browser client keeps the signed-in user under a well-known key. This
//! adapter turns that record into an explicit [`Session`]; engines never
//! read it themselves.

use riffle_core::{keys, CurrentUser, KeyValueStore, Session};

/// Resolve the signed-in user from `store`
///
/// Absent, unreadable or malformed records, and records without an id, all
/// yield an anonymous session.
pub fn session_from_store(store: &dyn KeyValueStore) -> Session {
    let raw = match store.get(keys::CURRENT_USER) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::anonymous(),
        Err(e) => {
            tracing::warn!("Failed to read current user: {}", e);
            return Session::anonymous();
        }
    };

    match serde_json::from_str::<CurrentUser>(&raw) {
        Ok(user) => Session::from_user(user),
        Err(e) => {
            tracing::warn!("Discarding malformed current user record: {}", e);
            Session::anonymous()
        }
    }
}

/// Store `user` as the signed-in user
pub fn store_current_user(store: &dyn KeyValueStore, user: &CurrentUser) -> riffle_core::Result<()> {
    let raw = serde_json::to_string(user)?;
    store.set(keys::CURRENT_USER, &raw)
}
