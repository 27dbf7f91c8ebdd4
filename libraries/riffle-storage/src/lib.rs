//! Riffle Storage
//!
//! Persistence adapters and stored track collections for the Riffle client.
//!
//! # Architecture
//!
//! Every adapter implements [`riffle_core::KeyValueStore`]:
//! - [`MemoryStore`]: volatile, for tests and hosts without storage
//! - [`RedbStore`]: a single redb file, for native hosts
//! - `WebStorage`: the page's `localStorage` (`wasm` feature)
//!
//! On top of the store:
//! - [`StoredTrackRepository`]: per-user and global track collections,
//!   including play-count bookkeeping
//! - [`session_from_store`]: resolves the signed-in user record into a
//!   [`riffle_core::Session`]
//!
//! # Example
//!
//! ```rust
//! use riffle_core::{KeyValueStore, TrackId, TrackRepository, UserId};
//! use riffle_storage::{MemoryStore, StoredTrackRepository};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! store
//!     .set("tracks", r#"[{"id":"t1","title":"Dawn","artist":"Ila"}]"#)
//!     .unwrap();
//!
//! let tracks = StoredTrackRepository::new(store.clone());
//! let found = tracks
//!     .record_play(&UserId::new("u1"), &TrackId::new("t1"))
//!     .unwrap();
//! assert!(found);
//! ```

mod error;
mod file_store;
mod memory;
pub mod tracks;
pub mod users;

#[cfg(feature = "wasm")]
mod web;

pub use error::StorageError;
pub use file_store::RedbStore;
pub use memory::MemoryStore;
pub use tracks::{StoredTrackRepository, TrackCollection};
pub use users::{session_from_store, store_current_user};

#[cfg(feature = "wasm")]
pub use web::WebStorage;
