//! Riffle - Playback Management
//!
//! Session-level playback state for the Riffle client.
//!
//! This crate provides:
//! - Current track, queue, playing and visibility state
//! - Next/previous navigation with wraparound
//! - Play-count reporting through a [`riffle_core::TrackRepository`]
//! - Drainable events for UI synchronization
//!
//! # Architecture
//!
//! `riffle-playback` never touches audio or storage directly:
//! - Decoding and output belong to the host page
//! - Play counts go through an injected `TrackRepository`
//! - The signed-in user arrives as an explicit `Session`
//!
//! Every command is total: invalid requests (navigating an empty queue,
//! pausing while paused) are no-ops and storage failures are logged.
//!
//! # Example
//!
//! ```rust
//! use riffle_core::{Session, Track};
//! use riffle_playback::PlaybackManager;
//!
//! let mut manager = PlaybackManager::new(Session::signed_in("u1", "Alice"));
//!
//! let a = Track::new("a", "Intro", "Ila", 120);
//! let b = Track::new("b", "Outro", "Ila", 140);
//!
//! manager.play_track(a.clone(), Some(vec![a.clone(), b.clone()]));
//! assert!(manager.is_playing());
//! assert!(manager.is_visible());
//!
//! manager.next_track();
//! assert_eq!(manager.current_track().map(|t| t.id.as_str()), Some("b"));
//!
//! // Wraps back to the start
//! manager.next_track();
//! assert_eq!(manager.current_track().map(|t| t.id.as_str()), Some("a"));
//!
//! manager.hide_player();
//! assert!(!manager.is_playing());
//! ```

mod events;
mod manager;
pub mod types;

// Public exports
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use types::PlaybackSnapshot;
