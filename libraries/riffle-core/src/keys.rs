//! Storage key scheme
//!
//! Keys are shared with the browser client, so they keep its spelling.

use crate::types::UserId;

/// Signed-in user record (`{"id": ..., "name": ...}`)
pub const CURRENT_USER: &str = "currentUser";

/// Global track collection
pub const GLOBAL_TRACKS: &str = "tracks";

/// Per-user track collection
pub fn user_tracks(user: &UserId) -> String {
    format!("tracks_{}", user)
}

/// Per-user notification feed
pub fn notifications(user: &UserId) -> String {
    format!("notifications_{}", user)
}
