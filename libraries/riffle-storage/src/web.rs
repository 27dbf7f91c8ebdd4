//! Browser `localStorage` adapter
//!
//! Looks up `window.localStorage` on every call: `web_sys::Storage` is not
//! `Send`, and the handle can disappear (private browsing, revoked
//! permission) while the page lives.

use riffle_core::KeyValueStore;
use wasm_bindgen::JsValue;

use crate::error::{Result, StorageError};

/// [`KeyValueStore`] over the page's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    /// Create the adapter
    pub fn new() -> Self {
        Self
    }

    /// Whether `localStorage` is reachable right now
    pub fn is_available() -> bool {
        local_storage().is_ok()
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> riffle_core::Result<Option<String>> {
        let storage = local_storage()?;
        Ok(storage.get_item(key).map_err(js_error)?)
    }

    fn set(&self, key: &str, value: &str) -> riffle_core::Result<()> {
        let storage = local_storage()?;
        Ok(storage.set_item(key, value).map_err(js_error)?)
    }

    fn remove(&self, key: &str) -> riffle_core::Result<()> {
        let storage = local_storage()?;
        Ok(storage.remove_item(key).map_err(js_error)?)
    }
}
