use std::time::Duration;

use leptos::set_timeout;

use crate::{reducer::DesktopAction, runtime_context::DesktopRuntimeContext};

pub(super) fn run_after(delay_ms: u32, f: impl FnOnce() + 'static) {
    set_timeout(f, Duration::from_millis(u64::from(delay_ms)));
}

/// Dispatches `action` once `delay_ms` elapses. Stale targets resolve to reducer no-ops.
pub(super) fn dispatch_after(runtime: DesktopRuntimeContext, delay_ms: u32, action: DesktopAction) {
    run_after(delay_ms, move || runtime.dispatch_action(action));
}
