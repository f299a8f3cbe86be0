//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod launcher;
mod overlay;
mod shortcuts;
mod taskbar;
mod window;

use std::time::Duration;

use desktop_app_contract::AppKey;
use leptos::*;

use self::{
    launcher::{DesktopIcons, Dock, LauncherMenu},
    overlay::MatrixOverlayLayer,
    shortcuts::{decode_shortcut, GlobalShortcut, KeyChord},
    taskbar::{Taskbar, TopBar},
    window::DesktopWindow,
};

use crate::{
    apps::{self, NoticeView},
    model::{
        DesktopState, MatrixColumn, PointerPosition, WindowContent, WindowId, WindowRecord,
    },
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

/// Height of the bottom taskbar, excluded from the window viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 48;
const LAUNCHER_MENU_ID: &str = "launcherMenu";

/// Activates `app` from a launcher surface: focus its window, open one, or run its effect.
fn launch(runtime: DesktopRuntimeContext, app: AppKey) {
    runtime.dispatch_action(DesktopAction::ActivateApp {
        app,
        viewport: Some(runtime.viewport()),
    });
}

fn shell_style(state: &DesktopState) -> String {
    let palette = state.color_scheme.palette();
    format!(
        "--neon-green:{};--neon-pink:{};--neon-cyan:{};",
        palette.primary, palette.secondary, palette.accent
    )
}

fn run_shortcut(runtime: DesktopRuntimeContext, shortcut: GlobalShortcut) {
    match shortcut {
        GlobalShortcut::OpenTerminal => launch(runtime, AppKey::Terminal),
        GlobalShortcut::CycleFocus => runtime.dispatch_action(DesktopAction::CycleFocus),
        GlobalShortcut::SlashToTerminal => {
            runtime.dispatch_action(DesktopAction::OpenTerminalWithInput {
                text: "/".to_string(),
                viewport: Some(runtime.viewport()),
            });
        }
    }
}

#[component]
/// Renders the full desktop shell UI. Must be mounted inside [`crate::DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let key = ev.key();
        if let Some(shortcut) = decode_shortcut(KeyChord::from_event(&ev, &key)) {
            ev.prevent_default();
            run_shortcut(runtime, shortcut);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
                viewport: runtime.viewport(),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=move || state.with(shell_style)
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <TopBar />
            <Dock />
            <DesktopIcons />
            <div
                id="windowsContainer"
                class="windows-container"
                on:contextmenu=move |ev: web_sys::MouseEvent| ev.prevent_default()
            >
                <For each=move || state.get().windows key=|win| win.id.0 let:win>
                    <DesktopWindow window_id=win.id />
                </For>
            </div>
            <LauncherMenu />
            <Taskbar />
            <MatrixOverlayLayer />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ColorScheme;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shell_style_exposes_scheme_palette_as_css_variables() {
        let mut state = DesktopState::default();
        state.color_scheme = ColorScheme::Pink;
        let palette = ColorScheme::Pink.palette();
        assert_eq!(
            shell_style(&state),
            format!(
                "--neon-green:{};--neon-pink:{};--neon-cyan:{};",
                palette.primary, palette.secondary, palette.accent
            )
        );
    }
}
