use super::*;
use desktop_app_contract::{AppHost, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Elements that keep their own pointer behavior instead of starting a window drag.
const DRAG_EXEMPT_SELECTOR: &str = "input, textarea, button, a, select, canvas, .window-btn";

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Inputs the window body is mounted from. Focus, stacking, geometry and minimize state never
/// change it, so chrome updates leave the hosted app alone.
#[derive(Debug, Clone, PartialEq)]
struct WindowMount {
    content: WindowContent,
    launch_seed: u64,
}

impl WindowMount {
    fn of(win: &WindowRecord) -> Self {
        Self {
            content: win.content.clone(),
            launch_seed: win.launch_seed,
        }
    }
}

fn window_class(win: &WindowRecord) -> String {
    format!(
        "retro-window{}{}{}{}{}",
        if win.is_focused { " focused" } else { "" },
        if win.minimized { " minimized" } else { "" },
        if win.maximized { " maximized" } else { "" },
        if win.closing { " closing" } else { "" },
        if win.content.is_notice() { " warning-window" } else { "" },
    )
}

fn window_style(win: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
    )
}

fn chrome(
    window: Memo<Option<WindowRecord>>,
    attr: fn(&WindowRecord) -> String,
) -> impl Fn() -> String + Copy + 'static {
    move || window.with(|win| win.as_ref().map(attr).unwrap_or_default())
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let exists = create_memo(move |_| window.with(Option::is_some));
    let maximize_label = Signal::derive(move || {
        if window.with(|win| win.as_ref().is_some_and(|w| w.maximized)) {
            "Restore"
        } else {
            "Maximize"
        }
    });

    let focus = move |_| {
        let should_focus = window
            .get_untracked()
            .is_some_and(|w| w.is_live() && (!w.is_focused || w.minimized));
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let minimize = move || runtime.dispatch_action(DesktopAction::ToggleMinimize { window_id });
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            viewport: runtime.viewport(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || a11y::event_target_within(&ev, DRAG_EXEMPT_SELECTOR) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    // The section is built once per window; only its attributes track the record.
    view! {
        <Show when=move || exists.get() fallback=|| ()>
            <section
                class=chrome(window, window_class)
                style=chrome(window, window_style)
                on:pointerdown=focus
                role="dialog"
                aria-label=chrome(window, |win| win.title.clone())
                aria-hidden=chrome(window, |win| win.minimized.to_string())
            >
                <header class="window-header" on:pointerdown=begin_move>
                    <span class="window-title">{chrome(window, |win| win.file_label.clone())}</span>
                    <div class="window-controls">
                        <WindowButton class="minimize" label="Minimize" glyph="−" on_press=minimize />
                        <WindowButton
                            class="maximize"
                            label=maximize_label
                            glyph="□"
                            on_press=toggle_maximize
                        />
                        <WindowButton class="close" label="Close" glyph="✕" on_press=close />
                    </div>
                </header>
                <div class="window-content" on:pointerdown=begin_move>
                    <WindowBody window_id=window_id />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn WindowButton(
    class: &'static str,
    #[prop(into)] label: MaybeSignal<&'static str>,
    glyph: &'static str,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("window-btn {class}")
            title=move || label.get()
            aria-label=move || label.get()
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                on_press();
            }
        >
            {glyph}
        </button>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let command_sender = Callback::new(move |command| {
        runtime.dispatch_action(DesktopAction::HandleAppCommand {
            window_id,
            command,
            viewport: runtime.viewport(),
        });
    });
    let theme = Signal::derive(move || state.with(|desktop| desktop.terminal_theme));
    let host = AppHost::new(window_id.0, command_sender, theme);

    // Mounted once per window; the app owns its view for the window's lifetime.
    let contents = state
        .with_untracked(|desktop| desktop.window(window_id).map(WindowMount::of))
        .map(|WindowMount { content, launch_seed }| match content {
            WindowContent::App(app) => match apps::app_module(app) {
                Some(module) => module.mount(AppMountContext {
                    app,
                    window_id: window_id.0,
                    launch_seed,
                    host,
                }),
                None => view! { <p class="centered">"Nothing to show"</p> }.into_view(),
            },
            WindowContent::Notice(message) => view! { <NoticeView message=message /> }.into_view(),
        })
        .unwrap_or_else(|| view! { <p class="centered">"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::GameKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{InteractionState, WindowRect},
        reducer::reduce_desktop,
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };

    fn reduce(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action).expect("reduce");
    }

    fn open(state: &mut DesktopState, app: AppKey) -> WindowId {
        let mut interaction = InteractionState::default();
        reduce(
            state,
            &mut interaction,
            DesktopAction::OpenWindow(apps::default_open_request(app, Some(VIEWPORT))),
        );
        state.windows.last().expect("window opened").id
    }

    fn record(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window exists")
    }

    #[test]
    fn chrome_changes_leave_the_mounted_body_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let terminal = open(&mut state, AppKey::Terminal);
        let mounted = WindowMount::of(record(&state, terminal));
        let focused_class = window_class(record(&state, terminal));

        let snake = open(&mut state, AppKey::Game(GameKind::Snake));
        assert!(!record(&state, terminal).is_focused);
        assert_ne!(window_class(record(&state, terminal)), focused_class);
        assert_eq!(WindowMount::of(record(&state, terminal)), mounted);

        let snake_mount = WindowMount::of(record(&state, snake));
        let actions = [
            DesktopAction::FocusWindow { window_id: terminal },
            DesktopAction::FocusWindow { window_id: snake },
            DesktopAction::BeginMove {
                window_id: terminal,
                pointer: PointerPosition { x: 300, y: 300 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 280, y: 290 },
                viewport: VIEWPORT,
            },
            DesktopAction::EndMove,
            DesktopAction::ToggleMaximize {
                window_id: terminal,
                viewport: VIEWPORT,
            },
            DesktopAction::MinimizeWindow { window_id: terminal },
            DesktopAction::RestoreWindow { window_id: terminal },
        ];
        for action in actions {
            reduce(&mut state, &mut interaction, action);
            assert_eq!(WindowMount::of(record(&state, terminal)), mounted);
            assert_eq!(WindowMount::of(record(&state, snake)), snake_mount);
        }
        assert!(record(&state, terminal).maximized);
        assert!(window_class(record(&state, terminal)).contains(" maximized"));
    }

    #[test]
    fn window_style_tracks_geometry_and_stacking() {
        let mut state = DesktopState::default();
        let id = open(&mut state, AppKey::Terminal);
        let win = record(&state, id);
        assert_eq!(
            window_style(win),
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
            )
        );
    }
}
