//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{entropy_seed, HostServices};

use crate::{
    components::TASKBAR_HEIGHT_PX,
    effect_executor,
    host::DesktopHostContext,
    model::{DeepLinkState, DesktopState, InteractionState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Desktop area available to windows right now.
    pub fn viewport(&self) -> WindowRect {
        self.host.get_value().desktop_viewport_rect(TASKBAR_HEIGHT_PX)
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext, deep_link: DeepLinkState) {
    runtime.host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);
    if !deep_link.is_empty() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink {
            deep_link,
            viewport: Some(runtime.viewport()),
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted preferences.
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Apps to open once the desktop is up.
    #[prop(optional)]
    deep_link: DeepLinkState,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::with_seed(entropy_seed()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            // Timers and late clicks routinely target windows that are already gone.
            Err(err @ ReducerError::WindowNotFound(_)) => {
                logging::debug_warn!("desktop reducer ignored action: {err}");
            }
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime, deep_link);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
