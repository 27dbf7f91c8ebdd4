//! # Synchronous event bus
//!
//! [`EventBus`] fans a published [`SocialEvent`] out to every subscriber
//! registered for its [`EventKind`] before `publish` returns.
//!
//! ## Rules
//! - **Validated publish**: malformed payloads are rejected before any
//!   subscriber runs.
//! - **Ordered delivery**: subscribers of one kind run in subscription order.
//! - **Snapshot dispatch**: the subscriber list is copied before delivery, so a
//!   subscriber may subscribe or unsubscribe while handling an event. Changes
//!   take effect from the next publish.
//! - **No persistence**: events published with no subscribers are dropped.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::event::{EventKind, SocialEvent};
use crate::error::Result;

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event handler registered on the bus
pub trait Subscriber: Send + Sync {
    /// Handle one event
    fn on_event(&self, event: &SocialEvent);
}

impl<F> Subscriber for F
where
    F: Fn(&SocialEvent) + Send + Sync,
{
    fn on_event(&self, event: &SocialEvent) {
        self(event);
    }
}

struct Registration {
    id: SubscriptionId,
    kind: EventKind,
    subscriber: Arc<dyn Subscriber>,
}

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    registrations: RwLock<Vec<Registration>>,
}

/// Process-wide publish/subscribe channel for social events
///
/// Cheap to clone; clones share one subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` for events of `kind`
    pub fn subscribe<S>(&self, kind: EventKind, subscriber: S) -> SubscriptionId
    where
        S: Subscriber + 'static,
    {
        self.subscribe_shared(kind, Arc::new(subscriber))
    }

    /// Register an already shared subscriber for events of `kind`
    pub fn subscribe_shared(&self, kind: EventKind, subscriber: Arc<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.write().push(Registration {
            id,
            kind,
            subscriber,
        });
        tracing::debug!(event = %kind, subscription = id.0, "EventBus subscribe");
        id
    }

    /// Remove a subscription
    ///
    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registrations = self.write();
        let before = registrations.len();
        registrations.retain(|r| r.id != id);
        let removed = registrations.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "EventBus unsubscribe");
        }
        removed
    }

    /// Validate `event` and deliver it to every subscriber of its kind
    ///
    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: SocialEvent) -> Result<usize> {
        event.validate()?;

        let kind = event.kind();
        let targets: Vec<Arc<dyn Subscriber>> = self
            .read()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| Arc::clone(&r.subscriber))
            .collect();

        tracing::debug!(event = %kind, subscriber_count = targets.len(), "EventBus publish");

        for subscriber in &targets {
            subscriber.on_event(&event);
        }

        Ok(targets.len())
    }

    /// Number of subscribers registered for `kind`
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.read().iter().filter(|r| r.kind == kind).count()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Registration>> {
        self.inner
            .registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Registration>> {
        self.inner
            .registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiffleError;
    use crate::types::{UserId, UserRef};
    use std::sync::Mutex;

    fn follow(followed: &str) -> SocialEvent {
        SocialEvent::NewFollower {
            follower: UserRef::new("u2", "Bob"),
            followed_id: UserId::new(followed),
        }
    }

    #[test]
    fn delivers_only_to_matching_kind() {
        let bus = EventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let follows = Arc::clone(&log);
        bus.subscribe(EventKind::NewFollower, move |e: &SocialEvent| {
            follows.lock().unwrap().push(e.kind());
        });
        let likes = Arc::clone(&log);
        bus.subscribe(EventKind::TrackLiked, move |e: &SocialEvent| {
            likes.lock().unwrap().push(e.kind());
        });

        assert_eq!(bus.publish(follow("u1")).unwrap(), 1);
        assert_eq!(*log.lock().unwrap(), vec![EventKind::NewFollower]);
    }

    #[test]
    fn delivery_follows_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let order = Arc::clone(&order);
            bus.subscribe(EventKind::NewFollower, move |_: &SocialEvent| {
                order.lock().unwrap().push(n);
            });
        }

        bus.publish(follow("u1")).unwrap();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        let id = bus.subscribe(EventKind::NewFollower, move |_: &SocialEvent| {
            *counter.lock().unwrap() += 1;
        });

        bus.publish(follow("u1")).unwrap();
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.publish(follow("u1")).unwrap(), 0);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn invalid_event_reaches_nobody() {
        let bus = EventBus::new();
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        bus.subscribe(EventKind::NewFollower, move |_: &SocialEvent| {
            *counter.lock().unwrap() += 1;
        });

        let result = bus.publish(follow(""));
        assert!(matches!(result, Err(RiffleError::InvalidEvent(_))));
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn subscriber_may_subscribe_during_dispatch() {
        let bus = EventBus::new();
        let inner_bus = bus.clone();

        bus.subscribe(EventKind::NewFollower, move |_: &SocialEvent| {
            inner_bus.subscribe(EventKind::TrackLiked, |_: &SocialEvent| {});
        });

        bus.publish(follow("u1")).unwrap();
        assert_eq!(bus.subscriber_count(EventKind::TrackLiked), 1);
    }
}
