#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use leptos::{logging, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    host::DesktopHostContext,
    model::{WindowId, WindowRect, FALLBACK_VIEWPORT},
};

#[cfg(target_arch = "wasm32")]
const MIN_VIEWPORT_WIDTH: i32 = 320;
#[cfg(target_arch = "wasm32")]
const MIN_VIEWPORT_HEIGHT: i32 = 220;

#[cfg(target_arch = "wasm32")]
fn window_input_element(window_id: WindowId) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(&window_primary_input_dom_id(window_id.0))?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

// Runs `f` on the next macrotask so a window opened in the same dispatch has rendered.
#[cfg(target_arch = "wasm32")]
fn defer(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
}

pub(super) fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    defer(move || {
        if let Some(element) = window_input_element(window_id) {
            let _ = element.focus();
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Replaces the value of a window's text input and notifies its `input` listener.
pub(super) fn seed_window_input(window_id: WindowId, text: String) {
    #[cfg(target_arch = "wasm32")]
    defer(move || {
        let Some(element) = window_input_element(window_id) else {
            return;
        };
        let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        input.set_value(&text);
        if let Ok(event) = web_sys::Event::new("input") {
            let _ = input.dispatch_event(&event);
        }
        let _ = input.focus();
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (window_id, text);
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.w);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.h + taskbar_height_px);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(MIN_VIEWPORT_WIDTH),
                h: (height - taskbar_height_px).max(MIN_VIEWPORT_HEIGHT),
            };
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = taskbar_height_px;
    FALLBACK_VIEWPORT
}
