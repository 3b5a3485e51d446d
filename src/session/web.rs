//! Browser `localStorage` store (`wasm` feature).

use crate::error::StorageError;
use crate::session::store::KeyValueStore;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Holds no handle: the storage object is looked up on every call so the
/// store stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_err(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", value))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_err)
    }
}
