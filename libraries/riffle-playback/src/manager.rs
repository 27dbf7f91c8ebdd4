//! Playback manager - session state and navigation
//!
//! Owns the current track, the navigation queue and the two orthogonal
//! flags (playing, visible). Every transition is a total function of the
//! current state; nothing is rejected.

use std::sync::Arc;

use riffle_core::{Session, Track, TrackRepository};

use crate::{events::PlaybackEvent, types::PlaybackSnapshot};

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Playback session manager
///
/// One instance per UI session. State is not persisted; only play counts
/// reach storage, through the optional [`TrackRepository`].
pub struct PlaybackManager {
    // State
    current_track: Option<Track>,
    queue: Vec<Track>,
    is_playing: bool,
    is_visible: bool,

    // Collaborators
    session: Session,
    tracks: Option<Arc<dyn TrackRepository>>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create a manager with empty state
    pub fn new(session: Session) -> Self {
        Self {
            current_track: None,
            queue: Vec::new(),
            is_playing: false,
            is_visible: false,
            session,
            tracks: None,
            pending_events: Vec::new(),
        }
    }

    /// Report plays to `tracks`
    #[must_use]
    pub fn with_track_repository(mut self, tracks: Arc<dyn TrackRepository>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    /// Replace the session (sign-in / sign-out)
    ///
    /// Playback state is kept; only future play counts are affected.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ===== Playback Control =====

    /// Play `track`, optionally replacing the queue
    ///
    /// Shows the player and sets playing. The play is reported to the track
    /// repository when a user is signed in; failures are logged and ignored.
    pub fn play_track(&mut self, track: Track, queue: Option<Vec<Track>>) {
        if let Some(queue) = queue {
            self.replace_queue(queue);
        }

        self.record_play(&track);

        let previous_track_id = self.current_track.take().map(|t| t.id);
        tracing::debug!(track = %track.id, "Playing track");
        self.emit(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        self.current_track = Some(track);
        self.set_playing(true);
        self.set_visible(true);
    }

    /// Pause playback
    pub fn pause_track(&mut self) {
        self.set_playing(false);
    }

    /// Resume the current track
    ///
    /// No-op without a current track. Does not count as a new play.
    pub fn resume(&mut self) {
        if self.current_track.is_some() {
            self.set_playing(true);
        }
    }

    /// Skip to the next queue entry, wrapping to the first
    ///
    /// No-op when the queue is empty or nothing is loaded. A current track
    /// that is not in the queue advances to the first entry.
    pub fn next_track(&mut self) {
        if let Some(track) = self.neighbour(Direction::Forward) {
            self.play_track(track, None);
        }
    }

    /// Go back to the previous queue entry, wrapping to the last
    ///
    /// No-op when the queue is empty or nothing is loaded. A current track
    /// that is not in the queue goes to the last entry.
    pub fn previous_track(&mut self) {
        if let Some(track) = self.neighbour(Direction::Backward) {
            self.play_track(track, None);
        }
    }

    // ===== Queue Management =====

    /// Replace the queue without touching the current track or playing flag
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        self.replace_queue(tracks);
    }

    // ===== Visibility =====

    /// Show the player
    pub fn show_player(&mut self) {
        self.set_visible(true);
    }

    /// Hide the player; hiding also stops playback
    pub fn hide_player(&mut self) {
        self.set_visible(false);
        self.set_playing(false);
    }

    // ===== State Queries =====

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Navigation queue
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Whether audio should be playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the player is shown
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Position of the current track in the queue
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.queue.iter().position(|t| t.id == current.id)
    }

    /// Copy of the whole session state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            queue: self.queue.clone(),
            is_playing: self.is_playing,
            is_visible: self.is_visible,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn neighbour(&self, direction: Direction) -> Option<Track> {
        if self.queue.is_empty() {
            return None;
        }
        self.current_track.as_ref()?;

        let len = self.queue.len();
        let target = match (direction, self.current_index()) {
            (Direction::Forward, Some(index)) => (index + 1) % len,
            (Direction::Forward, None) => 0,
            (Direction::Backward, Some(0) | None) => len - 1,
            (Direction::Backward, Some(index)) => index - 1,
        };

        self.queue.get(target).cloned()
    }

    fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.emit(PlaybackEvent::StateChanged { is_playing });
        }
    }

    fn set_visible(&mut self, is_visible: bool) {
        if self.is_visible != is_visible {
            self.is_visible = is_visible;
            self.emit(PlaybackEvent::VisibilityChanged { is_visible });
        }
    }

    fn record_play(&self, track: &Track) {
        let (Some(user), Some(tracks)) = (self.session.user_id(), self.tracks.as_ref()) else {
            return;
        };

        match tracks.record_play(user, &track.id) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(track = %track.id, "Track not in stored collections, play not counted");
            }
            Err(e) => {
                tracing::warn!("Failed to record play for {}: {}", track.id, e);
            }
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(Session::anonymous())
    }
}

impl std::fmt::Debug for PlaybackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackManager")
            .field("current_track", &self.current_track.as_ref().map(|t| &t.id))
            .field("queue_len", &self.queue.len())
            .field("is_playing", &self.is_playing)
            .field("is_visible", &self.is_visible)
            .finish_non_exhaustive()
    }
}
