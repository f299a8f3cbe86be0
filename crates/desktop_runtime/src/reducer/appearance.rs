//! Reducer helpers for color scheme, terminal theme, and matrix overlay transitions.

use rand::{rngs::SmallRng, Rng};

use crate::{
    model::{DesktopState, MatrixColumn, MatrixOverlay},
    reducer::{DesktopAction, RuntimeEffect},
    window_manager::with_rng,
};

/// Horizontal spacing between overlay columns.
pub const MATRIX_COLUMN_WIDTH_PX: i32 = 20;
/// Glyphs per overlay column.
pub const MATRIX_GLYPHS_PER_COLUMN: usize = 30;
const MATRIX_GLYPHS: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

/// Handles appearance actions. Returns `false` when `action` belongs elsewhere.
pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    match action {
        DesktopAction::SetColorScheme(scheme) => {
            state.color_scheme = *scheme;
            effects.push(RuntimeEffect::PersistColorScheme(*scheme));
        }
        DesktopAction::SetTheme(theme) => {
            state.terminal_theme = *theme;
            effects.push(RuntimeEffect::PersistTheme(*theme));
        }
        DesktopAction::HydratePreferences {
            color_scheme,
            theme,
        } => {
            if let Some(scheme) = color_scheme {
                state.color_scheme = *scheme;
            }
            if let Some(theme) = theme {
                state.terminal_theme = *theme;
            }
        }
        DesktopAction::StartMatrixOverlay {
            duration_ms,
            viewport_width,
        } => start_matrix_overlay(state, *duration_ms, *viewport_width, effects),
        DesktopAction::StopMatrixOverlay { generation } => {
            stop_matrix_overlay(state, *generation);
        }
        _ => return false,
    }
    true
}

/// Replaces any visible overlay with a fresh one and schedules its removal.
pub(super) fn start_matrix_overlay(
    state: &mut DesktopState,
    duration_ms: u32,
    viewport_width: i32,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.overlay_generation += 1;
    let generation = state.overlay_generation;
    let columns = with_rng(state, |rng| matrix_columns(rng, viewport_width));
    state.overlay = Some(MatrixOverlay {
        generation,
        columns,
    });
    effects.push(RuntimeEffect::ScheduleOverlayRemoval {
        generation,
        delay_ms: duration_ms,
    });
}

/// Removes the overlay. A timer passes its own generation so it never removes a newer overlay;
/// `None` removes whatever is showing.
pub(super) fn stop_matrix_overlay(state: &mut DesktopState, generation: Option<u64>) {
    let matches = match (&state.overlay, generation) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(overlay), Some(generation)) => overlay.generation == generation,
    };
    if matches {
        state.overlay = None;
    }
}

fn matrix_columns(rng: &mut SmallRng, viewport_width: i32) -> Vec<MatrixColumn> {
    let glyphs = MATRIX_GLYPHS.chars().collect::<Vec<_>>();
    let count = viewport_width.max(0) / MATRIX_COLUMN_WIDTH_PX;
    (0..count)
        .map(|idx| MatrixColumn {
            left_px: idx * MATRIX_COLUMN_WIDTH_PX,
            duration_s: rng.gen_range(2.0..5.0),
            opacity: rng.gen_range(0.5..1.0),
            glyphs: (0..MATRIX_GLYPHS_PER_COLUMN)
                .map(|_| glyphs[rng.gen_range(0..glyphs.len())])
                .collect(),
        })
        .collect()
}
