//! Playback Events
//!
//! Event-based communication for UI synchronization. Commands queue events;
//! the presentation layer drains them after each interaction.

use riffle_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track was (re)started
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the track it replaced (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Playing flag flipped
    StateChanged {
        /// New playing flag
        is_playing: bool,
    },

    /// Player chrome shown or hidden
    VisibilityChanged {
        /// New visibility flag
        is_visible: bool,
    },

    /// Queue replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}
