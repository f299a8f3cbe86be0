use leptos::{logging, spawn_local};

use crate::{
    host::DesktopHostContext, persistence, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        let stored = persistence::load_preferences(prefs.as_ref()).await;
        logging::log!(
            "desktop boot ({} host): scheme={:?} theme={:?}",
            host.host_strategy().as_str(),
            stored.color_scheme,
            stored.theme
        );
        if stored.color_scheme.is_some() || stored.theme.is_some() {
            runtime.dispatch_action(DesktopAction::HydratePreferences {
                color_scheme: stored.color_scheme,
                theme: stored.theme,
            });
        }
    });
}
