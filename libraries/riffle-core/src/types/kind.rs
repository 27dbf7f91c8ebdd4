/// Notification kind
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone liked one of your tracks
    Like,
    /// Someone followed you
    Follow,
    /// Someone sent you a message
    Message,
    /// Someone you follow uploaded a track
    TrackUpload,
    /// Someone invited you to collaborate
    Collaboration,
}

impl NotificationKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Follow => "follow",
            Self::Message => "message",
            Self::TrackUpload => "track_upload",
            Self::Collaboration => "collaboration",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
