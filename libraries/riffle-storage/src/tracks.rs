//! Stored track collections
//!
//! Tracks live as JSON arrays under two keys: the uploader's own collection
//! (`tracks_{user}`) and the global collection (`tracks`). Play counts are
//! bumped in place on the raw JSON so fields this crate does not model
//! survive the rewrite.

use std::sync::Arc;

use riffle_core::{keys, KeyValueStore, Result, Track, TrackId, TrackRepository, UserId};
use serde_json::Value;

/// Which stored collection to address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackCollection {
    /// A user's own uploads
    User(UserId),
    /// Every shared track
    Global,
}

impl TrackCollection {
    /// Storage key of the collection
    pub fn key(&self) -> String {
        match self {
            Self::User(user) => keys::user_tracks(user),
            Self::Global => keys::GLOBAL_TRACKS.to_string(),
        }
    }
}

/// [`TrackRepository`] over JSON collections in a [`KeyValueStore`]
#[derive(Clone)]
pub struct StoredTrackRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoredTrackRepository {
    /// Create a repository writing through `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a collection
    ///
    /// A missing or malformed collection loads as empty.
    pub fn load(&self, collection: &TrackCollection) -> Result<Vec<Track>> {
        let key = collection.key();
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(tracks) => Ok(tracks),
            Err(e) => {
                tracing::warn!("Discarding malformed track collection {}: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace a collection
    pub fn save(&self, collection: &TrackCollection, tracks: &[Track]) -> Result<()> {
        let raw = serde_json::to_string(tracks)?;
        self.store.set(&collection.key(), &raw)
    }

    /// Increment the play count of `track` in one collection
    ///
    /// Returns `Ok(false)` when the collection is missing, malformed, or does
    /// not contain the track. Nothing is written in that case.
    fn bump_plays(&self, key: &str, track: &TrackId) -> Result<bool> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(false);
        };

        let mut entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Skipping play count for malformed collection {}: {}", key, e);
                return Ok(false);
            }
        };

        let Some(entry) = entries
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|entry| entry.get("id").and_then(Value::as_str) == Some(track.as_str()))
        else {
            return Ok(false);
        };

        let plays = entry.get("plays").and_then(Value::as_u64).unwrap_or(0);
        entry.insert("plays".to_string(), Value::from(plays + 1));

        self.store.set(key, &serde_json::to_string(&entries)?)?;
        Ok(true)
    }
}

impl std::fmt::Debug for StoredTrackRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredTrackRepository").finish_non_exhaustive()
    }
}

impl TrackRepository for StoredTrackRepository {
    fn record_play(&self, user: &UserId, track: &TrackId) -> Result<bool> {
        let in_user = self.bump_plays(&keys::user_tracks(user), track)?;
        let in_global = self.bump_plays(keys::GLOBAL_TRACKS, track)?;

        tracing::debug!(
            track = %track,
            user = %user,
            in_user,
            in_global,
            "Recorded play"
        );

        Ok(in_user || in_global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn repository(entries: &[(&str, &str)]) -> (Arc<MemoryStore>, StoredTrackRepository) {
        let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
        let repo = StoredTrackRepository::new(store.clone());
        (store, repo)
    }

    #[test]
    fn bump_preserves_unmodelled_fields() {
        let (store, repo) = repository(&[(
            "tracks",
            r#"[{"id":"t1","title":"A","artist":"X","genre":"ambient","plays":4}]"#,
        )]);

        assert!(repo.record_play(&UserId::new("u1"), &TrackId::new("t1")).unwrap());

        let raw = store.get("tracks").unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["plays"], 5);
        assert_eq!(value[0]["genre"], "ambient");
    }

    #[test]
    fn unknown_track_writes_nothing() {
        let original = r#"[{"id":"t1","title":"A","artist":"X"}]"#;
        let (store, repo) = repository(&[("tracks", original)]);

        assert!(!repo.record_play(&UserId::new("u1"), &TrackId::new("t2")).unwrap());
        assert_eq!(store.get("tracks").unwrap().as_deref(), Some(original));
        assert!(!store.contains("tracks_u1"));
    }

    #[test]
    fn malformed_collection_loads_empty() {
        let (_store, repo) = repository(&[("tracks", "{broken")]);
        assert!(repo.load(&TrackCollection::Global).unwrap().is_empty());
        assert!(!repo.record_play(&UserId::new("u1"), &TrackId::new("t1")).unwrap());
    }

    #[test]
    fn collection_keys() {
        assert_eq!(TrackCollection::Global.key(), "tracks");
        assert_eq!(TrackCollection::User(UserId::new("u7")).key(), "tracks_u7");
    }
}
