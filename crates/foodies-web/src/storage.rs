//! `localStorage` backend for the cart store.

use foodies_cart::{CartError, StorageBackend};
use web_sys::{Storage, Window};

use crate::dom::describe;

/// The window's `localStorage`.
///
/// Some browsers deny storage (privacy modes, sandboxed frames). The backend
/// then reports every operation as failed, so reads degrade to an empty cart
/// and writes are logged.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage, CartError> {
        self.storage
            .as_ref()
            .ok_or_else(|| CartError::Storage("localStorage unavailable".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| CartError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| CartError::Storage(describe(&e)))
    }

    fn delete(&self, key: &str) -> Result<(), CartError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| CartError::Storage(describe(&e)))
    }
}
