//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; the async [`PrefsStore`] impl simply wraps it.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())
    }

    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is disabled or the read throws.
    pub fn load_value(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|err| format!("localStorage get_item failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Writes a raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is disabled or full.
    pub fn save_value(self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .set_item(key, raw)
                .map_err(|err| format!("localStorage set_item failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.load_value(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_value(key, raw) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_reads_nothing_and_accepts_writes() {
        let store = WebPrefsStore;
        block_on(store.save_pref("rivs_theme", "dos")).expect("save");
        assert_eq!(block_on(store.load_pref("rivs_theme")).expect("load"), None);
    }
}
