//! localStorage backend
//!
//! Implements [`StorageBackend`] over `window.localStorage`. Every failure
//! (no window, storage disabled, quota exceeded) maps to
//! [`StoreError::Backend`]; the core store turns those into its fail-open /
//! best-effort behavior, so none of them surface to the user.

use moodtrack::store::{StorageBackend, StoreError, StoreResult};

/// Key-value backend over the browser's localStorage
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StoreError::Backend("no window".to_string()))?
        .local_storage()
        .map_err(|_| StoreError::Backend("localStorage unavailable".to_string()))?
        .ok_or_else(|| StoreError::Backend("localStorage disabled".to_string()))
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|_| StoreError::Backend(format!("failed to read key '{}'", key)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Backend(format!("failed to write key '{}'", key)))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Backend(format!("failed to remove key '{}'", key)))
    }
}
