//! Notification records

use chrono::{DateTime, Utc};
use riffle_core::{NotificationId, NotificationKind, TrackId, UserRef};
use serde::{Deserialize, Serialize};

/// One entry of a user's feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique id assigned by the feed
    pub id: NotificationId,

    /// What the notification is about
    #[serde(rename = "type")]
    pub kind: NotificationKind,

    /// Display title
    pub title: String,

    /// Display body
    pub message: String,

    /// User who caused it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_user: Option<UserRef>,

    /// Track it refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<TrackId>,

    /// Creation instant
    pub timestamp: DateTime<Utc>,

    /// Whether the user has seen it
    #[serde(default)]
    pub read: bool,

    /// Opaque payload for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Notification content before the feed assigns id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    /// What the notification is about
    pub kind: NotificationKind,
    /// Display title
    pub title: String,
    /// Display body
    pub message: String,
    /// User who caused it
    pub from_user: Option<UserRef>,
    /// Track it refers to
    pub track_id: Option<TrackId>,
    /// Whether it starts out read
    pub read: bool,
    /// Opaque payload for the renderer
    pub data: Option<serde_json::Value>,
}

impl NotificationDraft {
    /// Unread draft with no origin user, track or payload
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            from_user: None,
            track_id: None,
            read: false,
            data: None,
        }
    }

    /// Attribute the draft to `user`
    #[must_use]
    pub fn by_user(mut self, user: UserRef) -> Self {
        self.from_user = Some(user);
        self
    }

    /// Point the draft at a track
    #[must_use]
    pub fn for_track(mut self, track_id: TrackId) -> Self {
        self.track_id = Some(track_id);
        self
    }

    /// Attach a renderer payload
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl Notification {
    /// Complete a draft
    pub fn from_draft(draft: NotificationDraft, id: NotificationId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            from_user: draft.from_user,
            track_id: draft.track_id,
            timestamp,
            read: draft.read,
            data: draft.data,
        }
    }

    /// Age label for list rendering: "just now", "5m ago", "3h ago", "2d ago",
    /// then the calendar date
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.timestamp);

        if age.num_minutes() < 1 {
            "just now".to_string()
        } else if age.num_hours() < 1 {
            format!("{}m ago", age.num_minutes())
        } else if age.num_days() < 1 {
            format!("{}h ago", age.num_hours())
        } else if age.num_days() < 7 {
            format!("{}d ago", age.num_days())
        } else {
            self.timestamp.format("%Y-%m-%d").to_string()
        }
    }
}
