//! Key/value preference storage used for visitor settings (theme, accent, locale, cursor).

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Boxed, object-safe future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host storage for small JSON preference documents, one document per key.
///
/// Browser builds back this with `localStorage`; the trait stays async so a slower store can be
/// swapped in without touching callers.
pub trait PrefsStore {
    /// Reads the raw JSON stored under `key`, if any.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Writes `raw_json` under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never holds anything. Used when no storage is available.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Process-local store. Clones share the same map.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw JSON currently held for `key` without going through the async API.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_owned(), raw_json.to_owned());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries.borrow_mut().remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_saves_loads_and_deletes_raw_values() {
        let store = MemoryPrefsStore::default();
        let dyn_store: &dyn PrefsStore = &store;

        block_on(dyn_store.save_pref("portfolio.locale", "\"es\"")).expect("save");
        assert_eq!(
            block_on(dyn_store.load_pref("portfolio.locale")).expect("load"),
            Some("\"es\"".to_string())
        );
        assert_eq!(store.len(), 1);

        block_on(dyn_store.delete_pref("portfolio.locale")).expect("delete");
        assert!(store.is_empty());
        block_on(dyn_store.delete_pref("portfolio.locale")).expect("delete missing key");
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        block_on(store.save_pref("k", "1")).expect("save");
        assert_eq!(other.raw("k"), Some("1".to_string()));
    }

    #[test]
    fn noop_store_accepts_writes_and_returns_nothing() {
        let store = NoopPrefsStore;
        block_on(store.save_pref("k", "{}")).expect("save");
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
        block_on(store.delete_pref("k")).expect("delete");
    }
}
