//! Key-value storage backends.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::CartError;

/// A string key-value store with the shape of the browser's `localStorage`.
///
/// Methods take `&self`: backends are single-threaded handles onto an
/// external store.
pub trait StorageBackend {
    /// Get the value stored under `key`, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CartError>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CartError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CartError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CartError> {
        (**self).delete(key)
    }
}

/// In-memory backend for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate data written by an older page.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CartError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert!(storage.exists("k").unwrap());
        storage.delete("k").unwrap();
        assert!(!storage.exists("k").unwrap());
        storage.delete("k").unwrap();
    }

    #[test]
    fn test_seeded_entry() {
        let storage = MemoryStorage::new().with_entry("cart", "[]");
        assert_eq!(storage.raw("cart").as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);
    }
}
