use super::*;
use platform_host::local_clock_now;

/// Attribute marking buttons that toggle the launcher; clicks on them don't count as "outside".
pub(super) const LAUNCHER_TOGGLE_ATTR: &str = "data-launcher-toggle";

fn clock_label() -> String {
    local_clock_now().label()
}

#[component]
/// Top panel with the activities button and the date/time readout.
pub(super) fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock = create_rw_signal(clock_label());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(clock_label()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="top-bar">
            <button
                type="button"
                id="launcherBtn"
                class="launcher-btn"
                data-launcher-toggle="true"
                aria-haspopup="menu"
                aria-controls=LAUNCHER_MENU_ID
                aria-expanded=move || runtime.state.get().launcher_open.to_string()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
            >
                "Activities"
            </button>
            <div id="topCenterBar" class="top-center-bar" aria-live="off">
                {move || clock.get()}
            </div>
        </div>
    }
}

#[component]
/// Bottom bar: start button plus one restore button per minimized window.
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(DesktopState::taskbar_entries));

    view! {
        <footer class="taskbar" style=format!("height:{TASKBAR_HEIGHT_PX}px;")>
            <button
                type="button"
                id="taskbarStartBtn"
                class="taskbar-start-btn"
                data-launcher-toggle="true"
                aria-label="Show applications"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
            >
                <span class="start-glyph" aria-hidden="true"></span>
            </button>
            <div id="taskbarWindows" class="taskbar-windows" role="group" aria-label="Minimized windows">
                <For each=move || entries.get() key=|entry| entry.window_id.0 let:entry>
                    {{
                        let window_id = entry.window_id;
                        let icon_class = entry
                            .icon
                            .and_then(apps::app_descriptor)
                            .map(apps::AppDescriptor::icon_class)
                            .unwrap_or_else(|| "app-icon".to_string());
                        view! {
                            <button
                                type="button"
                                id=format!("taskbar-btn-{}", window_id.0)
                                class="taskbar-window-btn"
                                title=entry.label.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
                                }
                            >
                                <span class=icon_class aria-hidden="true"></span>
                                <span class="taskbar-window-label">{entry.label.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </footer>
    }
}
