//! `window.open`-backed external URL adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs in a new browser tab.
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    /// Opens `url` in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns an error when no window exists or the popup is blocked.
    pub fn open_now(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            match window.open_with_url_and_target(url, "_blank") {
                Ok(Some(_)) => Ok(()),
                Ok(None) => Err(format!("popup blocked for {url}")),
                Err(err) => Err(format!("window.open failed: {err:?}")),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Ok(())
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open_now(url) })
    }
}
