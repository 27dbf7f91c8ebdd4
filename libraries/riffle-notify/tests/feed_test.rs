mod common;

use chrono::Duration;
use common::{alice, feed, fixed_clock, init_tracing, RecordingToasts};
use riffle_core::{keys, FeedSettings, KeyValueStore, NotificationKind, Session, UserId, UserRef};
use riffle_notify::{Clock, Notification, NotificationDraft, NotificationFeed, UuidIds};
use riffle_storage::MemoryStore;
use std::sync::Arc;

fn like_draft(n: usize) -> NotificationDraft {
    NotificationDraft::new(NotificationKind::Like, "New Like", format!("like #{n}"))
        .by_user(UserRef::new("bob", "Bob"))
}

#[test]
fn test_feed_survives_reload() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());

    let mut first = feed(alice(), &store);
    let older = first.add_notification(like_draft(1));
    let newer = first.add_notification(like_draft(2));
    first.mark_as_read(&older);
    drop(first);

    let reloaded = feed(alice(), &store);
    let ids: Vec<_> = reloaded.notifications().iter().map(|n| n.id.clone()).collect();
    assert_eq!(ids, vec![newer, older.clone()]);
    assert!(reloaded.get(&older).unwrap().read);
    assert_eq!(reloaded.unread_count(), 1);
}

#[test]
fn test_feeds_are_scoped_per_user() {
    let store = Arc::new(MemoryStore::new());

    let mut alices = feed(alice(), &store);
    alices.add_notification(like_draft(1));

    let bobs = feed(Session::signed_in("bob", "Bob"), &store);
    assert!(bobs.is_empty());
    assert!(store.contains(&keys::notifications(&UserId::new("alice"))));
    assert!(!store.contains(&keys::notifications(&UserId::new("bob"))));
}

#[test]
fn test_malformed_stored_feed_loads_empty() {
    init_tracing();
    let store = Arc::new(MemoryStore::with_entries([(
        "notifications_alice",
        "{not json",
    )]));

    let mut loaded = feed(alice(), &store);
    assert!(loaded.is_empty());
    assert_eq!(loaded.unread_count(), 0);

    // The next mutation overwrites the garbage
    loaded.add_notification(like_draft(1));
    let raw = store.get("notifications_alice").unwrap().unwrap();
    let stored: Vec<Notification> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_full_feed_evicts_oldest() {
    let store = Arc::new(MemoryStore::new());
    let mut full = feed(alice(), &store);

    let first = full.add_notification(like_draft(0));
    for n in 1..50 {
        full.add_notification(like_draft(n));
    }
    assert_eq!(full.len(), 50);
    assert!(full.get(&first).is_some());

    let newest = full.add_notification(like_draft(50));
    assert_eq!(full.len(), 50);
    assert_eq!(full.notifications()[0].id, newest);
    assert!(full.get(&first).is_none());

    let reloaded = feed(alice(), &store);
    assert_eq!(reloaded.len(), 50);
}

#[test]
fn test_configured_capacity_is_honored() {
    let settings = FeedSettings {
        capacity: 3,
        ..FeedSettings::default()
    };
    let mut small = NotificationFeed::new(alice(), Arc::new(MemoryStore::new()), settings);
    for n in 0..5 {
        small.add_notification(like_draft(n));
    }

    let messages: Vec<_> = small.notifications().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["like #4", "like #3", "like #2"]);
}

#[test]
fn test_toasts_follow_configured_kinds() {
    let toasts = Arc::new(RecordingToasts::default());
    let mut toasting = feed(alice(), &Arc::new(MemoryStore::new())).with_toasts(toasts.clone());

    toasting.add_notification(NotificationDraft::new(NotificationKind::Like, "New Like", "a"));
    toasting.add_notification(NotificationDraft::new(NotificationKind::Follow, "New Follower", "b"));
    toasting.add_notification(NotificationDraft::new(NotificationKind::Message, "New Message", "c"));
    toasting.add_notification(NotificationDraft::new(NotificationKind::TrackUpload, "New Track", "d"));
    toasting.add_notification(NotificationDraft::new(NotificationKind::Collaboration, "Invite", "e"));

    let shown: Vec<_> = toasts.shown().into_iter().map(|(_, message)| message).collect();
    assert_eq!(shown, vec!["a", "b", "c"]);
    assert_eq!(toasting.len(), 5);
}

#[test]
fn test_clear_all_is_durable() {
    let store = Arc::new(MemoryStore::new());
    let mut cleared = feed(alice(), &store);
    cleared.add_notification(like_draft(1));
    assert!(store.contains("notifications_alice"));

    cleared.clear_all();
    assert!(cleared.is_empty());
    assert_eq!(cleared.unread_count(), 0);
    assert!(!store.contains("notifications_alice"));

    assert!(feed(alice(), &store).is_empty());
}

#[test]
fn test_removing_last_notification_removes_key() {
    let store = Arc::new(MemoryStore::new());
    let mut single = feed(alice(), &store);
    let id = single.add_notification(like_draft(1));

    single.remove_notification(&id);
    assert!(!store.contains("notifications_alice"));
}

#[test]
fn test_mark_all_as_read() {
    let store = Arc::new(MemoryStore::new());
    let mut all = feed(alice(), &store);
    for n in 0..4 {
        all.add_notification(like_draft(n));
    }

    all.mark_all_as_read();
    assert_eq!(all.unread_count(), 0);
    assert_eq!(all.unread().count(), 0);
    assert_eq!(feed(alice(), &store).unread_count(), 0);
}

#[test]
fn test_bind_session_switches_feeds() {
    let store = Arc::new(MemoryStore::new());

    let mut bobs = feed(Session::signed_in("bob", "Bob"), &store);
    bobs.add_notification(like_draft(7));
    drop(bobs);

    let mut switching = feed(alice(), &store);
    switching.add_notification(like_draft(1));
    switching.add_notification(like_draft(2));

    switching.bind_session(Session::signed_in("bob", "Bob"));
    assert_eq!(switching.len(), 1);
    assert_eq!(switching.notifications()[0].message, "like #7");

    switching.bind_session(Session::anonymous());
    assert!(switching.is_empty());

    switching.bind_session(alice());
    assert_eq!(switching.len(), 2);
}

#[test]
fn test_injected_clock_and_ids() {
    let clock = fixed_clock();
    let mut stamped = feed(alice(), &Arc::new(MemoryStore::new()))
        .with_clock(clock.clone())
        .with_id_generator(Arc::new(UuidIds));

    let created_at = clock.now();
    let id = stamped.add_notification(like_draft(1));
    clock.advance(Duration::minutes(5));

    let notification = stamped.get(&id).unwrap();
    assert_eq!(notification.timestamp, created_at);
    assert_eq!(notification.relative_time(created_at + Duration::minutes(5)), "5m ago");
    assert_eq!(id.as_str().len(), 36);
}

#[test]
fn test_remounted_feed_issues_fresh_ids() {
    let store = Arc::new(MemoryStore::new());
    let clock = fixed_clock();

    let mut first = feed(alice(), &store).with_clock(clock.clone());
    let stored = first.add_notification(like_draft(1));
    drop(first);

    // Same store, same millisecond
    let mut second = feed(alice(), &store).with_clock(clock.clone());
    let added = second.add_notification(like_draft(2));
    assert_ne!(stored, added);
    assert!(added.as_str().starts_with(&format!("{}-", clock.now().timestamp_millis())));

    second.remove_notification(&added);
    assert_eq!(second.len(), 1);
    assert_eq!(second.notifications()[0].id, stored);

    second.mark_as_read(&stored);
    assert_eq!(second.unread_count(), 0);
    assert!(feed(alice(), &store).get(&stored).unwrap().read);
}
