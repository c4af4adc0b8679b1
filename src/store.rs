//! Key-value storage capability
//!
//! The browser build talks to `window.localStorage` (see `web::BrowserStore`).
//! Everything else, tests included, can use `MemoryStore`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;

/// Synchronous string store shared by every field group on the page
pub trait KeyValueStore {
    /// Stored value for `key`, `None` if absent
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// All stored pairs, sorted by key
    fn entries(&self) -> BTreeMap<String, String>;
}

/// In-memory store with the same semantics as LocalStorage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`
    pub fn with_entries<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let items = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: RefCell::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, String> {
        self.items.borrow().clone()
    }
}

/// Render the whole store as a JSON object for the console
pub fn dump(store: &dyn KeyValueStore) -> String {
    serde_json::to_string(&store.entries()).unwrap_or_else(|_| "{}".to_string())
}
