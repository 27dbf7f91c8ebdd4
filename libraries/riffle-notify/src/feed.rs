//! Notification feed engine
//!
//! One [`NotificationFeed`] holds the signed-in user's notifications, newest
//! first, and mirrors every change to the key/value store under
//! `notifications_{user}`. Storage failures never surface to callers; they
//! are logged and the in-memory feed stays authoritative.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use riffle_core::{
    keys, FeedSettings, KeyValueStore, NoopToasts, NotificationId, Session, SocialEvent, ToastSink,
};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::derive::draft_for;
use crate::ids::{IdGenerator, TimestampIds};
use crate::notification::{Notification, NotificationDraft};

/// Generator draws before falling back to a random id
const MAX_ID_ATTEMPTS: usize = 8;

/// Per-user notification feed
pub struct NotificationFeed {
    session: Session,
    store: Arc<dyn KeyValueStore>,
    settings: FeedSettings,
    toasts: Arc<dyn ToastSink>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    /// Create the feed for `session` and load its stored notifications
    ///
    /// Missing or malformed stored data yields an empty feed. An anonymous
    /// session starts empty and never touches the store.
    pub fn new(session: Session, store: Arc<dyn KeyValueStore>, settings: FeedSettings) -> Self {
        let mut feed = Self {
            session,
            store,
            settings,
            toasts: Arc::new(NoopToasts),
            ids: Arc::new(TimestampIds::new()),
            clock: Arc::new(SystemClock),
            notifications: Vec::new(),
        };
        feed.load();
        feed
    }

    /// Route toast-worthy notifications to `toasts`
    #[must_use]
    pub fn with_toasts(mut self, toasts: Arc<dyn ToastSink>) -> Self {
        self.toasts = toasts;
        self
    }

    /// Use `ids` for new notification ids
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Take timestamps (and timestamp-based ids) from `clock`
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ===== Session =====

    /// Session the feed belongs to
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Switch to another user and reload their feed
    pub fn bind_session(&mut self, session: Session) {
        debug!(user = ?session.user_id(), "Rebinding notification feed");
        self.session = session;
        self.load();
    }

    // ===== Mutations =====

    /// Add a notification at the top of the feed
    ///
    /// The oldest entries are evicted past capacity. Returns the new id.
    pub fn add_notification(&mut self, draft: NotificationDraft) -> NotificationId {
        let now = self.clock.now();
        let id = self.fresh_id(now);
        let notification = Notification::from_draft(draft, id.clone(), now);

        if self.settings.toasts(notification.kind) {
            self.toasts.show(&notification.title, &notification.message);
        }

        debug!(id = %id, kind = %notification.kind, "Notification added");
        self.notifications.insert(0, notification);
        self.notifications.truncate(self.capacity());
        self.persist();

        id
    }

    /// Mark one notification read; unknown ids are ignored
    pub fn mark_as_read(&mut self, id: &NotificationId) {
        let changed = match self.notifications.iter_mut().find(|n| &n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        };

        if changed {
            self.persist();
        }
    }

    /// Mark every notification read
    pub fn mark_all_as_read(&mut self) {
        let mut changed = false;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed = true;
        }

        if changed {
            self.persist();
        }
    }

    /// Delete one notification; unknown ids are ignored
    pub fn remove_notification(&mut self, id: &NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| &n.id != id);

        if self.notifications.len() != before {
            self.persist();
        }
    }

    /// Empty the feed, including its stored copy
    pub fn clear_all(&mut self) {
        self.notifications.clear();
        self.persist();
    }

    /// Apply the derivation rules to `event`
    ///
    /// Returns the id of the added notification, if the event concerns the
    /// current user.
    pub fn handle_event(&mut self, event: &SocialEvent) -> Option<NotificationId> {
        let draft = draft_for(&self.session, event, &self.settings)?;
        Some(self.add_notification(draft))
    }

    // ===== Queries =====

    /// Notifications, newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notification with `id`, if present
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    /// Unread notifications, newest first
    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.read)
    }

    /// Number of unread notifications, computed on each call
    pub fn unread_count(&self) -> usize {
        self.unread().count()
    }

    /// Number of notifications held
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Whether the feed holds no notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Feed tuning in effect
    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    // ===== Persistence =====

    /// Id not already held by the feed
    ///
    /// Stored entries come from earlier mounts, so a generator draw can clash
    /// with one of them.
    fn fresh_id(&self, now: DateTime<Utc>) -> NotificationId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id(now);
            if self.get(&id).is_none() {
                return id;
            }
            debug!(id = %id, "Generated id already in feed, drawing again");
        }

        warn!("Id generator keeps repeating feed ids, using a random id");
        NotificationId::generate()
    }

    fn capacity(&self) -> usize {
        self.settings.capacity.max(1)
    }

    fn load(&mut self) {
        self.notifications.clear();

        let Some(user) = self.session.user_id() else {
            return;
        };
        let key = keys::notifications(user);

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read notifications");
                return;
            }
        };

        match serde_json::from_str::<Vec<Notification>>(&raw) {
            Ok(mut stored) => {
                stored.truncate(self.capacity());
                debug!(key = %key, count = stored.len(), "Loaded notifications");
                self.notifications = stored;
            }
            Err(e) => warn!(key = %key, error = %e, "Discarding malformed notifications"),
        }
    }

    fn persist(&self) {
        let Some(user) = self.session.user_id() else {
            return;
        };
        let key = keys::notifications(user);

        let result = if self.notifications.is_empty() {
            self.store.remove(&key)
        } else {
            match serde_json::to_string(&self.notifications) {
                Ok(json) => self.store.set(&key, &json),
                Err(e) => Err(e.into()),
            }
        };

        if let Err(e) = result {
            warn!(key = %key, error = %e, "Failed to persist notifications");
        }
    }
}

impl fmt::Debug for NotificationFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationFeed")
            .field("session", &self.session)
            .field("settings", &self.settings)
            .field("len", &self.notifications.len())
            .field("unread", &self.unread_count())
            .finish_non_exhaustive()
    }
}
