//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{ExternalUrlService, MemoryPrefsStore, NoopExternalUrlService, PrefsStore};

/// Which family of adapters backs a [`HostServices`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser adapters (`localStorage`, `window.open`).
    Browser,
    /// In-memory adapters for tests and non-browser builds.
    Memory,
}

impl HostStrategy {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host services.
///
/// Adapter selection happens before this bundle reaches `desktop_runtime`, which keeps the
/// runtime free of browser-specific types.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store for color scheme and theme selections.
    pub prefs: Rc<dyn PrefsStore>,
    /// External URL opener used by the `surprise` command.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle backed by an in-memory preference store and no URL navigation.
    pub fn in_memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(NoopExternalUrlService),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
