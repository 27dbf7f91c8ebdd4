//! Riffle Core
//!
//! Platform-agnostic types, contracts and event plumbing shared by the Riffle
//! client state engines.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackRef`, `UserRef` and the id newtypes
//! - **Session**: explicit current-user context handed to every engine
//! - **Contracts**: `KeyValueStore`, `TrackRepository`, `ToastSink`
//! - **Events**: the typed `SocialEvent` and the synchronous `EventBus`
//! - **Configuration**: `ClientConfig` loaded from file and environment
//! - **Error Handling**: unified `RiffleError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use riffle_core::{EventBus, EventKind, Session, SocialEvent, UserId, UserRef};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let bus = EventBus::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! bus.subscribe(EventKind::NewFollower, move |_: &SocialEvent| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let delivered = bus
//!     .publish(SocialEvent::NewFollower {
//!         follower: UserRef::new("u2", "Bob"),
//!         followed_id: UserId::new("u1"),
//!     })
//!     .unwrap();
//!
//! assert_eq!(delivered, 1);
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//!
//! let session = Session::signed_in("u1", "Alice");
//! assert!(session.is_current(&UserId::new("u1")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use crate::config::{ClientConfig, FeedSettings, StorageSettings};
pub use error::{Result, RiffleError};
pub use events::{EventBus, EventKind, SocialEvent, Subscriber, SubscriptionId};
pub use session::{CurrentUser, Session};
pub use traits::{KeyValueStore, NoopToasts, ToastSink, TrackRepository};
pub use types::{NotificationId, NotificationKind, Track, TrackId, TrackRef, UserId, UserRef};
