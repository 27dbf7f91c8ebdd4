//! Read-side types for the presentation layer

use riffle_core::Track;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the playback session
///
/// Handed to renderers that should not hold a borrow of the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    /// Currently loaded track
    pub current_track: Option<Track>,

    /// Navigation queue
    pub queue: Vec<Track>,

    /// Whether audio should be playing
    pub is_playing: bool,

    /// Whether the player chrome is shown
    pub is_visible: bool,
}
