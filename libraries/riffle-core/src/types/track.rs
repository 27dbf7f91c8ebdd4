/// Track domain types
use serde::{Deserialize, Serialize};

use super::ids::{TrackId, UserId};

/// Shared track
///
/// Immutable from the playback engine's point of view. Upload and like
/// workflows own the stored copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique, stable track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork reference (URL or data URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,

    /// Duration in whole seconds (`duration` on the wire)
    #[serde(default, rename = "duration")]
    pub duration_secs: u32,

    /// Original upload file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Whether listeners may download the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<bool>,

    /// Like count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,

    /// Play count
    #[serde(default)]
    pub plays: u64,
}

impl Track {
    /// Create a track with the required metadata
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            artwork: None,
            duration_secs,
            file_name: None,
            allow_download: None,
            likes: None,
            plays: 0,
        }
    }
}

/// Minimal track reference carried by social events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    /// Track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Uploader of the track
    pub owner_id: UserId,
}

impl TrackRef {
    /// Create a track reference
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        owner_id: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            owner_id: owner_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_track_without_plays_defaults_to_zero() {
        let json = r#"{"id":"t1","title":"Song","artist":"Band","duration":200}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.plays, 0);
        assert_eq!(track.likes, None);
        assert_eq!(track.id.as_str(), "t1");
    }

    #[test]
    fn duration_uses_browser_field_name() {
        let json = r#"{"id":"t1","title":"Song","artist":"Band","duration":185}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.duration_secs, 185);

        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(value["duration"], 185);
        assert!(value.get("durationSecs").is_none());
    }
}
