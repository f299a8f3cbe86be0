use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, MemoryPrefsStore, NoopExternalUrlService};

use crate::{WebExternalUrlService, WebPrefsStore};

/// Returns the compile-time selected host strategy.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "memory-host")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "memory-host"))]
    {
        HostStrategy::Browser
    }
}

/// Builds the host service bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            external_urls: Rc::new(WebExternalUrlService),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Memory => HostServices {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(NoopExternalUrlService),
            host_strategy: HostStrategy::Memory,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_reports_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
    }
}
