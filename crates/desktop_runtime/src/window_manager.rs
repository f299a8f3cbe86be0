//! Shared window-manager transition helpers used by the desktop reducer.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::model::{DesktopState, WindowId, WindowRect, WindowSize};

/// Smallest left offset of a randomly placed window.
pub const PLACEMENT_MIN_X: i32 = 20;
/// Smallest top offset of a randomly placed window, below the top bar.
pub const PLACEMENT_MIN_Y: i32 = 40;

/// Focuses and raises `window_id` above every other window.
///
/// Returns `false` when the window is missing or closing.
pub fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state
        .windows
        .iter()
        .position(|w| w.id == window_id && w.is_live())
    else {
        return false;
    };

    let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
    let already_focused_top = {
        let window = &state.windows[index];
        window.is_focused && !window.minimized && window.z_index == top_z
    };
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    state.next_z = state.next_z.max(top_z) + 1;
    let window = &mut state.windows[index];
    window.z_index = state.next_z;
    window.is_focused = true;
    window.minimized = false;
    true
}

/// Enforces the focus invariants: minimized and closing windows never hold focus, at most one
/// window is focused, and when none is, the top-most remaining window takes focus and is raised.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for window in &mut state.windows {
        if window.minimized || window.closing {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if has_focused {
        return;
    }
    let fallback = state
        .windows
        .iter()
        .filter(|w| !w.minimized && w.is_live())
        .max_by_key(|w| w.z_index)
        .map(|w| w.id);
    if let Some(window_id) = fallback {
        focus_window_internal(state, window_id);
    }
}

/// Runs `f` with the desktop RNG and advances the stored seed.
pub fn with_rng<T>(state: &mut DesktopState, f: impl FnOnce(&mut SmallRng) -> T) -> T {
    let mut rng = SmallRng::seed_from_u64(state.rng_seed);
    let value = f(&mut rng);
    state.rng_seed = rng.gen();
    value
}

/// Picks a random position so a `size` window lies fully inside `viewport`.
///
/// The left edge falls in `[20, vw - w]` and the top edge in `[40, vh - h]`; on a viewport too
/// small for those margins the window is pinned to the viewport origin.
pub fn random_placement(rng: &mut SmallRng, size: WindowSize, viewport: WindowRect) -> WindowRect {
    let max_x = viewport.x + (viewport.w - size.w).max(0);
    let max_y = viewport.y + (viewport.h - size.h).max(0);
    let min_x = (viewport.x + PLACEMENT_MIN_X).min(max_x);
    let min_y = (viewport.y + PLACEMENT_MIN_Y).min(max_y);
    WindowRect {
        x: rng.gen_range(min_x..=max_x),
        y: rng.gen_range(min_y..=max_y),
        w: size.w,
        h: size.h,
    }
}

/// Near-full-viewport rect used by maximize: 2.5% / 5% margins, 95% x 90% size.
pub fn maximized_rect(viewport: WindowRect) -> WindowRect {
    WindowRect {
        x: viewport.x + viewport.w * 25 / 1000,
        y: viewport.y + viewport.h * 5 / 100,
        w: viewport.w * 95 / 100,
        h: viewport.h * 90 / 100,
    }
}

/// Applies a drag delta to the rect the drag started from, keeping it inside `viewport`.
pub fn dragged_rect(start: WindowRect, dx: i32, dy: i32, viewport: WindowRect) -> WindowRect {
    start.offset(dx, dy).clamped_within(viewport)
}
