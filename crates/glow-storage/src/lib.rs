use anyhow::Result;
use glow_types::CartBundle;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::warn;

/// String key-value storage, shaped after the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default, Debug)]
pub struct InMemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageKeys {
    pub cart: String,
    pub wishlist: String,
    pub dark_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "glow_cart".to_owned(),
            wishlist: "glow_wishlist".to_owned(),
            dark_mode: "glow_darkMode".to_owned(),
        }
    }
}

/// Reads and writes the storefront's three persisted values.
///
/// Every failure (storage unavailable, missing key, malformed JSON, quota)
/// is logged and swallowed; loads fall back to empty defaults.
pub struct Persistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn load_cart(&self) -> CartBundle {
        self.load_json(&self.keys.cart).unwrap_or_default()
    }

    pub fn save_cart(&self, bundle: &CartBundle) {
        self.save_json(&self.keys.cart, bundle);
    }

    pub fn load_wishlist(&self) -> Vec<String> {
        self.load_json(&self.keys.wishlist).unwrap_or_default()
    }

    pub fn save_wishlist(&self, wishlist: &[String]) {
        self.save_json(&self.keys.wishlist, &wishlist);
    }

    pub fn load_dark_mode(&self) -> bool {
        self.read(&self.keys.dark_mode).as_deref() == Some("1")
    }

    pub fn save_dark_mode(&self, enabled: bool) {
        self.write(&self.keys.dark_mode, if enabled { "1" } else { "0" });
    }

    fn load_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("ignoring malformed value under '{}': {}", key, err);
                None
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write(key, &raw),
            Err(err) => warn!("failed to serialize '{}': {}", key, err),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("storage read for '{}' failed: {}", key, err);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set_item(key, value) {
            warn!("storage write for '{}' failed: {}", key, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use glow_types::CartLine;

    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("SecurityError: storage disabled"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("QuotaExceededError"))
        }
    }

    fn persistence(store: &InMemoryStore) -> Persistence<&InMemoryStore> {
        Persistence::new(store, StorageKeys::default())
    }

    #[test]
    fn cart_bundle_roundtrip_uses_stable_shape() {
        let store = InMemoryStore::default();
        let p = persistence(&store);
        let bundle = CartBundle {
            cart: vec![CartLine {
                name: "Anua Serum".to_owned(),
                price: 26000,
            }],
            total: 26000,
        };

        p.save_cart(&bundle);

        assert_eq!(
            store.raw("glow_cart").as_deref(),
            Some(r#"{"cart":[{"name":"Anua Serum","price":26000}],"total":26000}"#)
        );
        assert_eq!(p.load_cart(), bundle);
    }

    #[test]
    fn wishlist_and_dark_mode_use_separate_keys() {
        let store = InMemoryStore::default();
        let p = persistence(&store);

        p.save_wishlist(&["Anua Serum".to_owned()]);
        p.save_dark_mode(true);

        assert_eq!(store.raw("glow_wishlist").as_deref(), Some(r#"["Anua Serum"]"#));
        assert_eq!(store.raw("glow_darkMode").as_deref(), Some("1"));
        assert_eq!(p.load_wishlist(), vec!["Anua Serum".to_owned()]);
        assert!(p.load_dark_mode());

        p.save_dark_mode(false);
        assert!(!p.load_dark_mode());
    }

    #[test]
    fn missing_and_malformed_values_fall_back_to_defaults() {
        let store = InMemoryStore::default();
        let p = persistence(&store);
        assert_eq!(p.load_cart(), CartBundle::default());
        assert!(p.load_wishlist().is_empty());
        assert!(!p.load_dark_mode());

        store.set_item("glow_cart", "{not json").unwrap();
        store.set_item("glow_wishlist", "42").unwrap();
        store.set_item("glow_darkMode", "true").unwrap();
        assert_eq!(p.load_cart(), CartBundle::default());
        assert!(p.load_wishlist().is_empty());
        assert!(!p.load_dark_mode());

        store.set_item("glow_cart", "null").unwrap();
        assert_eq!(p.load_cart(), CartBundle::default());
    }

    #[test]
    fn unavailable_storage_is_silent() {
        let p = Persistence::new(UnavailableStore, StorageKeys::default());
        p.save_cart(&CartBundle::default());
        p.save_wishlist(&[]);
        p.save_dark_mode(true);
        assert_eq!(p.load_cart(), CartBundle::default());
        assert!(p.load_wishlist().is_empty());
        assert!(!p.load_dark_mode());
    }

    #[test]
    fn noop_store_never_persists() {
        let p = Persistence::new(NoopStore, StorageKeys::default());
        p.save_dark_mode(true);
        assert!(!p.load_dark_mode());
    }
}
