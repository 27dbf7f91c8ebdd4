//! Notification id generation
//!
//! Ids must be unique per feed even when many notifications are created in
//! the same millisecond, and across feeds mounted on the same store.

use chrono::{DateTime, Utc};
use riffle_core::NotificationId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence shared by every [`TimestampIds`] in the process
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Source of fresh notification ids
pub trait IdGenerator: Send + Sync {
    /// Produce an id for a notification created at `now`
    ///
    /// Must not repeat an id this process has handed out before.
    fn next_id(&self, now: DateTime<Utc>) -> NotificationId;
}

/// `{unix millis}-{sequence}` ids
///
/// The millisecond prefix comes from the feed's clock and keeps ids roughly
/// time-sortable. The suffix is a per-process monotonic counter, so feeds
/// remounted within one millisecond still issue distinct ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl TimestampIds {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&self, now: DateTime<Utc>) -> NotificationId {
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        NotificationId::new(format!("{}-{}", now.timestamp_millis(), sequence))
    }
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, _now: DateTime<Utc>) -> NotificationId {
        NotificationId::generate()
    }
}
