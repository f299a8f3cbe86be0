use desktop_app_contract::{ColorScheme, TerminalTheme};
use leptos::{logging, spawn_local};

use crate::{host::DesktopHostContext, persistence};

pub(super) fn persist_color_scheme(host: DesktopHostContext, scheme: ColorScheme) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_color_scheme(prefs.as_ref(), scheme).await {
            logging::warn!("{err}");
        }
    });
}

pub(super) fn persist_theme(host: DesktopHostContext, theme: TerminalTheme) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_theme(prefs.as_ref(), theme).await {
            logging::warn!("{err}");
        }
    });
}
