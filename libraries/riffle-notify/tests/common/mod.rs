//! Common test utilities and fixtures
#![allow(dead_code)]

use riffle_core::{FeedSettings, KeyValueStore, Session, ToastSink};
use riffle_notify::{ManualClock, NotificationFeed};
use riffle_storage::MemoryStore;
use std::sync::{Arc, Mutex};

/// Install a test-friendly tracing subscriber once per binary
///
/// Honors `RUST_LOG`; defaults to debug output for the riffle crates.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riffle_notify=debug,riffle_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Toast sink that remembers every toast
#[derive(Default)]
pub struct RecordingToasts {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingToasts {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }
}

impl ToastSink for RecordingToasts {
    fn show(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

pub fn alice() -> Session {
    Session::signed_in("alice", "Alice")
}

pub fn fixed_clock() -> Arc<ManualClock> {
    use chrono::TimeZone;
    Arc::new(ManualClock::new(
        chrono::Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ))
}

/// Feed for `session` over `store` with default settings
pub fn feed(session: Session, store: &Arc<MemoryStore>) -> NotificationFeed {
    let store: Arc<dyn KeyValueStore> = store.clone();
    NotificationFeed::new(session, store, FeedSettings::default())
}

/// Test user fixtures
pub mod fixtures {
    pub const ALICE: &str = "alice";
    pub const BOB: &str = "bob";
    pub const CAROL: &str = "carol";
}
