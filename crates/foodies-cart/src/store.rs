//! Cart persistence over a single storage slot.

use crate::{Cart, CartError, StorageBackend};

/// Reads and writes the cart under one fixed storage key.
///
/// The slot holds a JSON array of `{name, price, qty}` records with no
/// version field.
#[derive(Debug)]
pub struct CartStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> CartStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the cart, reporting why the stored value was unusable.
    ///
    /// A missing key or a stored `null` is an empty cart, not an error.
    pub fn try_load(&self) -> Result<Cart, CartError> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str::<Option<Cart>>(&raw)?.unwrap_or_default()),
            None => Ok(Cart::new()),
        }
    }

    /// Load the cart. Unreadable or malformed state is an empty cart.
    pub fn load(&self) -> Cart {
        self.try_load().unwrap_or_default()
    }

    pub fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart)?;
        self.backend.set(&self.key, &raw)
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<(), CartError> {
        self.backend.delete(&self.key)
    }

    /// Read-modify-write the cart in one step.
    ///
    /// Nothing is written when `f` fails.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut Cart) -> Result<R, CartError>,
    ) -> Result<R, CartError> {
        let mut cart = self.load();
        let out = f(&mut cart)?;
        self.save(&cart)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    const KEY: &str = "foodies_cart_v1";

    #[test]
    fn test_missing_key_is_empty() {
        let store = CartStore::new(MemoryStorage::new(), KEY);
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_is_empty() {
        for raw in ["{oops", "42", r#"{"name":"Burger"}"#] {
            let store = CartStore::new(MemoryStorage::new().with_entry(KEY, raw), KEY);
            assert!(store.try_load().is_err(), "{raw} should be rejected");
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn test_null_is_empty() {
        let store = CartStore::new(MemoryStorage::new().with_entry(KEY, "null"), KEY);
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = CartStore::new(MemoryStorage::new(), KEY);
        let mut cart = Cart::new();
        cart.add("Burger", 120.0);
        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);
    }

    #[test]
    fn test_clear_removes_slot() {
        let storage = MemoryStorage::new();
        let store = CartStore::new(&storage, KEY);
        store.save(&Cart::new()).unwrap();
        assert!(storage.exists(KEY).unwrap());
        store.clear().unwrap();
        assert!(!storage.exists(KEY).unwrap());
    }

    #[test]
    fn test_update_skips_save_on_error() {
        let storage = MemoryStorage::new();
        let store = CartStore::new(&storage, KEY);
        let result = store.update(|cart| cart.increment(0));
        assert!(matches!(result, Err(CartError::LineNotFound(0))));
        assert!(storage.raw(KEY).is_none());

        let index = store
            .update(|cart| Ok(cart.add("Fries", 60.0)))
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.load().item_count(), 1);
    }
}
