use desktop_runtime::{DeepLinkState, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Rivs Portfolio" />
        <Meta name="description" content="A retro Ubuntu-style desktop portfolio with a working terminal." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Desktop entry point. `?open=about,snake` opens those apps once the desktop is up.
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let deep_link = query.with_untracked(|params| {
        params
            .get("open")
            .map(|value| DeepLinkState::from_open_param(value))
            .unwrap_or_default()
    });

    view! {
        <DesktopProvider host_services=build_host_services() deep_link=deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}
