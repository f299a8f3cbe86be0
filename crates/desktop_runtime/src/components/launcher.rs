use super::*;

#[component]
/// Category-grouped app launcher, toggled from the top bar and the taskbar.
pub(super) fn LauncherMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.get().launcher_open);

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let toggle_selector = format!("#{LAUNCHER_MENU_ID}, [{}]", taskbar::LAUNCHER_TOGGLE_ATTR);
        if !a11y::event_target_within(&ev, &toggle_selector) {
            runtime.dispatch_action(DesktopAction::CloseLauncher);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    create_effect(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            let _ = a11y::focus_first_menu_item(LAUNCHER_MENU_ID);
        }
        is_open
    });

    view! {
        <div
            id=LAUNCHER_MENU_ID
            class="launcher-menu"
            role="menu"
            aria-hidden=move || (!open.get()).to_string()
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    runtime.dispatch_action(DesktopAction::CloseLauncher);
                    return;
                }
                a11y::handle_menu_roving_keydown(&ev, LAUNCHER_MENU_ID);
            }
        >
            <div id="launcherGrid" class="launcher-grid">
                {apps::launcher_sections()
                    .into_iter()
                    .map(|(category, entries)| {
                        view! {
                            <div class="launcher-category">
                                <h4>{category.label()}</h4>
                                <div class="launcher-apps">
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            let app = entry.key;
                                            view! {
                                                <button
                                                    type="button"
                                                    role="menuitem"
                                                    id=format!("launcher-item-{}", app.as_str())
                                                    class="launcher-item"
                                                    data-app=app.as_str()
                                                    on:click=move |_| launch(runtime, app)
                                                >
                                                    <span class=entry.icon_class() aria-hidden="true"></span>
                                                    <span>{entry.name.clone()}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
/// Side dock with the pinned apps.
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <nav id="dock" class="dock" aria-label="Favorites">
            {apps::pinned_apps()
                .into_iter()
                .map(|entry| {
                    let app = entry.key;
                    view! {
                        <button
                            type="button"
                            class="dock-icon"
                            data-app=app.as_str()
                            title=entry.name.clone()
                            aria-label=entry.name.clone()
                            on:click=move |_| launch(runtime, app)
                        >
                            <span class=entry.icon_class() aria-hidden="true"></span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
/// Desktop icon grid for apps shown on the desktop.
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div id="desktopIcons" class="desktop-icons">
            {apps::desktop_icon_apps()
                .into_iter()
                .map(|entry| {
                    let app = entry.key;
                    view! {
                        <button
                            type="button"
                            class="desktop-icon"
                            data-app=app.as_str()
                            on:click=move |_| launch(runtime, app)
                        >
                            <span class=entry.icon_class() aria-hidden="true"></span>
                            <span class="desktop-icon-label">{entry.desktop_label.clone()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
