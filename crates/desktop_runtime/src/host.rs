//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer never touches timers, storage, or the DOM. It returns [`RuntimeEffect`] values
//! and this module carries them out against the injected [`HostServices`].

mod boot;
mod host_ui;
mod persistence_effects;
mod timers;

use std::rc::Rc;

use platform_host::{ExternalUrlService, HostServices, HostStrategy, PrefsStore};

use crate::{
    model::{WindowId, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy: HostStrategy,
}

impl DesktopHostContext {
    /// Wraps the services selected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            external_urls: services.external_urls,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns which adapter set backs this session, for boot logging.
    pub fn host_strategy(&self) -> HostStrategy {
        self.host_strategy
    }

    /// Reads stored preferences once and hydrates the reducer with them.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
            RuntimeEffect::SeedWindowInput { window_id, text } => {
                host_ui::seed_window_input(window_id, text);
            }
            RuntimeEffect::ScheduleWindowClose {
                window_id,
                delay_ms,
            } => timers::dispatch_after(
                runtime,
                delay_ms,
                DesktopAction::CloseWindow { window_id },
            ),
            RuntimeEffect::ScheduleWindowRemoval {
                window_id,
                delay_ms,
            } => timers::dispatch_after(
                runtime,
                delay_ms,
                DesktopAction::FinishCloseWindow { window_id },
            ),
            RuntimeEffect::ScheduleOverlayRemoval {
                generation,
                delay_ms,
            } => timers::dispatch_after(
                runtime,
                delay_ms,
                DesktopAction::StopMatrixOverlay {
                    generation: Some(generation),
                },
            ),
            RuntimeEffect::OpenExternalUrl { url, delay_ms } => {
                let host = self.clone();
                timers::run_after(delay_ms, move || host_ui::open_external_url(host, &url));
            }
            RuntimeEffect::PersistColorScheme(scheme) => {
                persistence_effects::persist_color_scheme(self.clone(), scheme);
            }
            RuntimeEffect::PersistTheme(theme) => {
                persistence_effects::persist_theme(self.clone(), theme);
            }
        }
    }

    /// Handles a request to focus a window's primary input.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field or canvas.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Returns the desktop area available to windows, excluding the taskbar.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }
}
