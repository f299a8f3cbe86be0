//! Key-value preference storage.
//!
//! Preferences are short text values addressed by a string key. Every read and write goes
//! through [`PrefsStore`] so callers can treat a disabled or missing backend as "preference not
//! persisted" instead of a hard failure.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for preference values stored as plain text per key.
///
/// Stores are last-writer-wins per key. Errors are plain strings because callers only log them.
pub trait PrefsStore {
    /// Reads the raw value stored under `key`, or `None` when the key was never written.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw value stored under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that accepts every write and remembers nothing.
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
        _raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Store whose backend is switched off, e.g. storage disabled by the browser.
///
/// Every call fails, which lets tests exercise the degrade-silently path.
pub struct UnavailablePrefsStore;

impl UnavailablePrefsStore {
    const REASON: &'static str = "preference storage unavailable";
}

impl PrefsStore for UnavailablePrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Err(Self::REASON.to_string()) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::REASON.to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store. Clones share the same map, so a clone can stand in for "a fresh session
/// reading the same browser storage".
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns a copy of every stored key and raw value, ordered by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.inner
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw.to_string());
            Ok(())
        })
    }
}

/// Reads `key` and decodes it with `parse`.
///
/// # Errors
///
/// Returns an error when the store fails or `parse` rejects the stored text.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T>(
    store: &S,
    key: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    parse(&raw)
        .map(Some)
        .ok_or_else(|| format!("preference `{key}` holds unrecognized value `{raw}`"))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_is_last_writer_wins_and_shared_between_clones() {
        let store = MemoryPrefsStore::default();
        let other_session = store.clone();

        block_on(store.save_pref("rivs_theme", "dos")).expect("save");
        block_on(store.save_pref("rivs_theme", "amber")).expect("save");

        assert_eq!(
            block_on(other_session.load_pref("rivs_theme")).expect("load"),
            Some("amber".to_string())
        );
        assert_eq!(
            other_session.entries(),
            vec![("rivs_theme".to_string(), "amber".to_string())]
        );
    }

    #[test]
    fn load_with_decodes_plain_text() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("rivs_colorScheme", "purple")).expect("save");

        let loaded = block_on(load_pref_with(&store, "rivs_colorScheme", |raw| {
            (raw == "purple").then_some(7)
        }))
        .expect("load");
        assert_eq!(loaded, Some(7));
        assert_eq!(
            block_on(load_pref_with(&store, "missing", |_| Some(1))).expect("load"),
            None
        );
    }

    #[test]
    fn load_with_reports_unrecognized_values() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("rivs_theme", "sepia")).expect("save raw");

        let err = block_on(load_pref_with(&store, "rivs_theme", |_| None::<u8>))
            .expect_err("rejected by parser");
        assert!(err.contains("rivs_theme"));
        assert!(err.contains("sepia"));
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let store: &dyn PrefsStore = &UnavailablePrefsStore;
        assert!(block_on(store.load_pref("k")).is_err());
        assert!(block_on(store.save_pref("k", "1")).is_err());
    }

    #[test]
    fn noop_store_is_always_empty() {
        let store: &dyn PrefsStore = &NoopPrefsStore;
        block_on(store.save_pref("k", "1")).expect("save");
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
    }
}
