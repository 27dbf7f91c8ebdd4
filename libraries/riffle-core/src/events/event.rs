//! Social event definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RiffleError};
use crate::types::{TrackRef, UserId, UserRef};

/// Event name a subscriber registers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A track was liked
    TrackLiked,
    /// A user gained a follower
    NewFollower,
    /// A direct message was sent
    NewMessage,
    /// A track was uploaded
    TrackUploaded,
}

impl EventKind {
    /// All kinds, in declaration order
    pub const ALL: [EventKind; 4] = [
        EventKind::TrackLiked,
        EventKind::NewFollower,
        EventKind::NewMessage,
        EventKind::TrackUploaded,
    ];

    /// Wire name of the event
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrackLiked => "track-liked",
            Self::NewFollower => "new-follower",
            Self::NewMessage => "new-message",
            Self::TrackUploaded => "track-uploaded",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain event carried by the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SocialEvent {
    /// `liker` liked `track`
    TrackLiked {
        /// The liked track (carries its owner)
        track: TrackRef,
        /// Who liked it
        liker: UserRef,
    },

    /// `follower` started following `followed_id`
    NewFollower {
        /// The new follower
        follower: UserRef,
        /// The followed user
        #[serde(rename = "followedId")]
        followed_id: UserId,
    },

    /// `sender` sent `content` to `recipient_id`
    NewMessage {
        /// Message author
        sender: UserRef,
        /// Message recipient
        #[serde(rename = "recipientId")]
        recipient_id: UserId,
        /// Message body
        content: String,
    },

    /// `uploader` published `track`
    TrackUploaded {
        /// The new track
        track: TrackRef,
        /// Who uploaded it
        uploader: UserRef,
        /// Uploader's followers at upload time
        #[serde(rename = "followerIds", default)]
        follower_ids: Vec<UserId>,
    },
}

impl SocialEvent {
    /// Kind used for subscription routing
    pub fn kind(&self) -> EventKind {
        match self {
            Self::TrackLiked { .. } => EventKind::TrackLiked,
            Self::NewFollower { .. } => EventKind::NewFollower,
            Self::NewMessage { .. } => EventKind::NewMessage,
            Self::TrackUploaded { .. } => EventKind::TrackUploaded,
        }
    }

    /// Check the payload shape before it reaches subscribers
    ///
    /// Every referenced id must be non-empty.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::TrackLiked { track, liker } => {
                require_track(self.kind(), track)?;
                require_user(self.kind(), "liker", &liker.id)
            }
            Self::NewFollower {
                follower,
                followed_id,
            } => {
                require_user(self.kind(), "follower", &follower.id)?;
                require_user(self.kind(), "followedId", followed_id)
            }
            Self::NewMessage {
                sender,
                recipient_id,
                ..
            } => {
                require_user(self.kind(), "sender", &sender.id)?;
                require_user(self.kind(), "recipientId", recipient_id)
            }
            Self::TrackUploaded {
                track,
                uploader,
                follower_ids,
            } => {
                require_track(self.kind(), track)?;
                require_user(self.kind(), "uploader", &uploader.id)?;
                follower_ids
                    .iter()
                    .try_for_each(|id| require_user(self.kind(), "followerIds", id))
            }
        }
    }
}

fn require_user(kind: EventKind, field: &str, id: &UserId) -> Result<()> {
    if id.is_empty() {
        return Err(RiffleError::invalid_event(format!(
            "{}: {} is empty",
            kind, field
        )));
    }
    Ok(())
}

fn require_track(kind: EventKind, track: &TrackRef) -> Result<()> {
    if track.id.is_empty() {
        return Err(RiffleError::invalid_event(format!("{}: track.id is empty", kind)));
    }
    require_user(kind, "track.ownerId", &track.owner_id)
}
