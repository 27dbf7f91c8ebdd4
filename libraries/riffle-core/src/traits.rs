/// Core traits for Riffle
use crate::error::Result;
use crate::types::{TrackId, UserId};

/// Namespaced key/value store
///
/// The persistence adapter every engine writes through. Values are
/// text-encoded (JSON). Implementations decide durability; callers treat
/// every failure as best-effort.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<()>;
}

/// Track collection owner
///
/// Playback reports plays through this collaborator instead of editing
/// stored collections itself.
pub trait TrackRepository: Send + Sync {
    /// Increment the play count of `track` in the user's and the global
    /// collection
    ///
    /// Returns `Ok(false)` when the track was not found in any collection.
    fn record_play(&self, user: &UserId, track: &TrackId) -> Result<bool>;
}

/// Transient presentation surface for toast-worthy notifications
pub trait ToastSink: Send + Sync {
    /// Show a toast
    fn show(&self, title: &str, message: &str);
}

/// Toast sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopToasts;

impl ToastSink for NoopToasts {
    fn show(&self, _title: &str, _message: &str) {}
}

impl<F> ToastSink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn show(&self, title: &str, message: &str) {
        self(title, message);
    }
}
