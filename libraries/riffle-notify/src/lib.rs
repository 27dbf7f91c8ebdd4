//! Riffle Notify
//!
//! Event-driven notification feed for the signed-in user.
//!
//! Social events published on the [`riffle_core::EventBus`] are turned into
//! [`Notification`]s by the rules in [`derive`]. The [`NotificationFeed`]
//! keeps them newest first, capped in size, and mirrors every change to the
//! key/value store so the feed survives restarts.
//!
//! # Example
//!
//! ```rust
//! use riffle_core::{EventBus, FeedSettings, Session, SocialEvent, TrackRef, UserRef};
//! use riffle_notify::{FeedListener, NotificationFeed};
//! use riffle_storage::MemoryStore;
//! use std::sync::{Arc, Mutex};
//!
//! let store = Arc::new(MemoryStore::new());
//! let feed = Arc::new(Mutex::new(NotificationFeed::new(
//!     Session::signed_in("u1", "Alice"),
//!     store,
//!     FeedSettings::default(),
//! )));
//!
//! let bus = EventBus::new();
//! let _listener = FeedListener::attach(&feed, &bus);
//!
//! bus.publish(SocialEvent::TrackLiked {
//!     track: TrackRef::new("t1", "Dawn", "u1"),
//!     liker: UserRef::new("u2", "Bob"),
//! })
//! .unwrap();
//!
//! let feed = feed.lock().unwrap();
//! assert_eq!(feed.unread_count(), 1);
//! assert_eq!(feed.notifications()[0].message, "Bob liked your track \"Dawn\"");
//! ```

pub mod clock;
pub mod derive;
pub mod feed;
pub mod ids;
pub mod listener;
pub mod notification;

pub use clock::{Clock, ManualClock, SystemClock};
pub use derive::draft_for;
pub use feed::NotificationFeed;
pub use ids::{IdGenerator, TimestampIds, UuidIds};
pub use listener::{FeedListener, SharedFeed};
pub use notification::{Notification, NotificationDraft};
pub use riffle_core::NotificationKind;
