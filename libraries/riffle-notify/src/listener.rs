//! Bus wiring for a feed
//!
//! Subscriptions live as long as the [`FeedListener`]; dropping it detaches
//! the feed from the bus.

use std::sync::{Arc, Mutex, PoisonError};

use riffle_core::{EventBus, EventKind, SocialEvent, SubscriptionId};
use tracing::debug;

use crate::feed::NotificationFeed;

/// Feed shared between the UI and bus subscribers
pub type SharedFeed = Arc<Mutex<NotificationFeed>>;

/// Active subscriptions of one feed on one bus
///
/// Delivery locks the feed, so a toast sink that publishes back onto the same
/// bus would deadlock.
#[derive(Debug)]
pub struct FeedListener {
    bus: EventBus,
    subscriptions: Vec<SubscriptionId>,
}

impl FeedListener {
    /// Subscribe `feed` to every social event kind on `bus`
    pub fn attach(feed: &SharedFeed, bus: &EventBus) -> Self {
        let subscriptions = EventKind::ALL
            .iter()
            .map(|&kind| {
                let feed = Arc::clone(feed);
                bus.subscribe(kind, move |event: &SocialEvent| {
                    let mut feed = feed.lock().unwrap_or_else(PoisonError::into_inner);
                    if let Some(id) = feed.handle_event(event) {
                        debug!(id = %id, event = %event.kind().as_str(), "Event produced notification");
                    }
                })
            })
            .collect();

        Self {
            bus: bus.clone(),
            subscriptions,
        }
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Unsubscribe now instead of on drop
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for FeedListener {
    fn drop(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.bus.unsubscribe(id);
        }
    }
}
