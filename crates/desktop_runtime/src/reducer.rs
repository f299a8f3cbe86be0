//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod appearance;

use desktop_app_contract::{AppCommand, AppKey, ColorScheme, EasterEgg, TerminalTheme};
use desktop_app_terminal::commands::{MATRIX_DURATION_MS, SURPRISE_DELAY_MS, SURPRISE_URL};
use rand::Rng;
use thiserror::Error;

use crate::{
    apps,
    model::{
        format_title_as_file, DeepLinkState, DesktopState, DragSession, InteractionState,
        OpenWindowRequest, PointerPosition, WindowContent, WindowId, WindowRecord, WindowRect,
        WindowSize, FALLBACK_VIEWPORT,
    },
    window_manager::{
        dragged_rect, focus_window_internal, maximized_rect, normalize_window_stack,
        random_placement, with_rng,
    },
};

pub use appearance::{MATRIX_COLUMN_WIDTH_PX, MATRIX_GLYPHS_PER_COLUMN};

/// Open user windows tolerated before the desktop suggests closing some.
pub const MAX_COMFORTABLE_WINDOWS: usize = 3;
/// Lifetime of the too-many-windows notice.
pub const NOTICE_LIFETIME_MS: u32 = 5000;
/// Fade-out time between a close request and removal.
pub const CLOSE_ANIMATION_MS: u32 = 200;
const NOTICE_TITLE: &str = "System Message";
const NOTICE_SIZE: WindowSize = WindowSize { w: 360, h: 150 };

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Focus the open, non-minimized window hosting `app`, or open one.
    ActivateApp {
        /// App to activate.
        app: AppKey,
        /// Desktop viewport used to place a new window.
        viewport: Option<WindowRect>,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Start the close animation of a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Remove a window once its close animation finished.
    FinishCloseWindow {
        /// Window to remove.
        window_id: WindowId,
    },
    /// Minimize a window into the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window and focus it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Minimize a visible window or restore a minimized one.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Switch a window between its own rect and the near-full viewport rect.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Focus the next window in open order, wrapping around.
    CycleFocus,
    /// Toggle the launcher menu open/closed.
    ToggleLauncher,
    /// Close the launcher menu if open.
    CloseLauncher,
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Viewport the window must stay inside.
        viewport: WindowRect,
    },
    /// End the active window drag.
    EndMove,
    /// Select and persist a color scheme.
    SetColorScheme(ColorScheme),
    /// Select and persist a terminal theme.
    SetTheme(TerminalTheme),
    /// Apply preferences read at boot without writing them back.
    HydratePreferences {
        /// Stored color scheme, if any.
        color_scheme: Option<ColorScheme>,
        /// Stored terminal theme, if any.
        theme: Option<TerminalTheme>,
    },
    /// Show a fresh matrix overlay.
    StartMatrixOverlay {
        /// Time before the overlay removes itself.
        duration_ms: u32,
        /// Viewport width; one column per 20 px.
        viewport_width: i32,
    },
    /// Remove the matrix overlay. `Some(generation)` only removes that overlay.
    StopMatrixOverlay {
        /// Overlay generation a timer was scheduled for.
        generation: Option<u64>,
    },
    /// Apply a request sent by the app hosted in `window_id`.
    HandleAppCommand {
        /// Window whose app sent the command.
        window_id: WindowId,
        /// Command payload.
        command: AppCommand,
        /// Current desktop viewport.
        viewport: WindowRect,
    },
    /// Activate the terminal and prefill its input line.
    OpenTerminalWithInput {
        /// Text placed in the terminal input.
        text: String,
        /// Desktop viewport used to place a new window.
        viewport: Option<WindowRect>,
    },
    /// Apply URL-derived deep-link instructions.
    ApplyDeepLink {
        /// Parsed deep-link payload.
        deep_link: DeepLinkState,
        /// Desktop viewport used to place new windows.
        viewport: Option<WindowRect>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the window's primary input.
    FocusWindowInput(WindowId),
    /// Place `text` into the window's primary input as if typed.
    SeedWindowInput {
        /// Target window.
        window_id: WindowId,
        /// Text to insert.
        text: String,
    },
    /// Dispatch [`DesktopAction::CloseWindow`] after `delay_ms`.
    ScheduleWindowClose {
        /// Window to close.
        window_id: WindowId,
        /// Delay before closing.
        delay_ms: u32,
    },
    /// Dispatch [`DesktopAction::FinishCloseWindow`] after `delay_ms`.
    ScheduleWindowRemoval {
        /// Window to remove.
        window_id: WindowId,
        /// Delay before removal.
        delay_ms: u32,
    },
    /// Dispatch [`DesktopAction::StopMatrixOverlay`] for `generation` after `delay_ms`.
    ScheduleOverlayRemoval {
        /// Overlay the timer belongs to.
        generation: u64,
        /// Delay before removal.
        delay_ms: u32,
    },
    /// Open an external URL after `delay_ms`.
    OpenExternalUrl {
        /// Target URL.
        url: String,
        /// Delay before navigating.
        delay_ms: u32,
    },
    /// Persist the selected color scheme.
    PersistColorScheme(ColorScheme),
    /// Persist the selected terminal theme.
    PersistTheme(TerminalTheme),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    /// The target window is gone or already closing. The state is left untouched.
    #[error("window {0:?} not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the only place window records, stacking, and the z counter change.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action addresses a window that is missing or
/// closing. No state changes in that case, so callers may treat it as a no-op.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if appearance::reduce_appearance_action(state, &action, &mut effects) {
        return Ok(effects);
    }

    match action {
        DesktopAction::OpenWindow(req) => {
            let viewport = req.viewport;
            let is_notice = req.content.is_notice();
            let window_id = open_window(state, req);
            state.launcher_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
            if !is_notice {
                enforce_window_limit(state, viewport, &mut effects);
            }
        }
        DesktopAction::ActivateApp { app, viewport } => {
            state.launcher_open = false;
            activate_app(state, app, viewport, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            live_window(state, window_id)?;
            focus_window_internal(state, window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let window = live_window_mut(state, window_id)?;
            window.closing = true;
            window.is_focused = false;
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            effects.push(RuntimeEffect::ScheduleWindowRemoval {
                window_id,
                delay_ms: CLOSE_ANIMATION_MS,
            });
        }
        DesktopAction::FinishCloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            live_window(state, window_id)?;
            minimize_window(state, window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            live_window(state, window_id)?;
            focus_window_internal(state, window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleMinimize { window_id } => {
            if live_window(state, window_id)?.minimized {
                focus_window_internal(state, window_id);
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            } else {
                minimize_window(state, window_id);
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            let window = live_window_mut(state, window_id)?;
            if window.maximized {
                if let Some(restore_rect) = window.restore_rect.take() {
                    window.rect = restore_rect;
                }
                window.maximized = false;
            } else {
                window.restore_rect = Some(window.rect);
                window.rect = maximized_rect(viewport);
                window.maximized = true;
            }
            focus_window_internal(state, window_id);
        }
        DesktopAction::CycleFocus => {
            if let Some(window_id) = next_in_cycle(state) {
                focus_window_internal(state, window_id);
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = live_window(state, window_id)?;
            let (rect_start, maximized) = (window.rect, window.maximized);
            focus_window_internal(state, window_id);
            interaction.dragging = (!maximized).then_some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.clone() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                match live_window_mut(state, session.window_id) {
                    Ok(window) if !window.maximized => {
                        window.rect = dragged_rect(session.rect_start, dx, dy, viewport);
                    }
                    Ok(_) => {}
                    Err(_) => interaction.dragging = None,
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::HandleAppCommand {
            window_id,
            command,
            viewport,
        } => {
            let follow_up = match command {
                AppCommand::Launch(app) => DesktopAction::ActivateApp {
                    app,
                    viewport: Some(viewport),
                },
                AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
                AppCommand::SetColorScheme(scheme) => DesktopAction::SetColorScheme(scheme),
                AppCommand::SetTheme(theme) => DesktopAction::SetTheme(theme),
                AppCommand::OpenExternalUrl { url, delay_ms } => {
                    effects.push(RuntimeEffect::OpenExternalUrl { url, delay_ms });
                    return Ok(effects);
                }
                AppCommand::StartMatrixOverlay { duration_ms } => {
                    DesktopAction::StartMatrixOverlay {
                        duration_ms,
                        viewport_width: viewport.w,
                    }
                }
                AppCommand::StopMatrixOverlay => {
                    DesktopAction::StopMatrixOverlay { generation: None }
                }
            };
            effects.extend(reduce_desktop(state, interaction, follow_up)?);
        }
        DesktopAction::OpenTerminalWithInput { text, viewport } => {
            state.launcher_open = false;
            activate_app(state, AppKey::Terminal, viewport, &mut effects);
            let terminal = state
                .windows
                .iter()
                .filter(|w| w.is_live() && !w.minimized && w.hosts(AppKey::Terminal))
                .max_by_key(|w| w.z_index)
                .map(|w| w.id);
            if let Some(window_id) = terminal {
                effects.push(RuntimeEffect::SeedWindowInput { window_id, text });
            }
        }
        DesktopAction::ApplyDeepLink {
            deep_link,
            viewport,
        } => {
            for app in deep_link.open {
                activate_app(state, app, viewport, &mut effects);
            }
        }
        DesktopAction::SetColorScheme(_)
        | DesktopAction::SetTheme(_)
        | DesktopAction::HydratePreferences { .. }
        | DesktopAction::StartMatrixOverlay { .. }
        | DesktopAction::StopMatrixOverlay { .. } => {}
    }

    normalize_window_stack(state);
    Ok(effects)
}

fn live_window(state: &DesktopState, window_id: WindowId) -> Result<&WindowRecord, ReducerError> {
    state
        .windows
        .iter()
        .find(|w| w.id == window_id && w.is_live())
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn live_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id && w.is_live())
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> WindowId {
    let window_id = next_window_id(state);
    let viewport = req.viewport.unwrap_or(FALLBACK_VIEWPORT);
    let (rect, launch_seed) = with_rng(state, |rng| {
        let rect = req
            .rect
            .unwrap_or_else(|| random_placement(rng, req.size, viewport));
        (rect, rng.gen::<u64>())
    });
    state.windows.push(WindowRecord {
        id: window_id,
        file_label: format_title_as_file(&req.title),
        title: req.title,
        content: req.content,
        rect,
        restore_rect: None,
        z_index: 0,
        is_focused: false,
        minimized: false,
        minimized_order: 0,
        maximized: false,
        closing: false,
        launch_seed,
    });
    focus_window_internal(state, window_id);
    window_id
}

fn activate_app(
    state: &mut DesktopState,
    app: AppKey,
    viewport: Option<WindowRect>,
    effects: &mut Vec<RuntimeEffect>,
) {
    match app {
        AppKey::EasterEgg(EasterEgg::Surprise) => {
            effects.push(RuntimeEffect::OpenExternalUrl {
                url: SURPRISE_URL.to_string(),
                delay_ms: SURPRISE_DELAY_MS,
            });
            return;
        }
        AppKey::EasterEgg(EasterEgg::Matrix) => {
            let width = viewport.unwrap_or(FALLBACK_VIEWPORT).w;
            appearance::start_matrix_overlay(state, MATRIX_DURATION_MS, width, effects);
            return;
        }
        _ => {}
    }

    let existing = state
        .windows
        .iter()
        .filter(|w| w.is_live() && !w.minimized && w.hosts(app))
        .max_by_key(|w| w.z_index)
        .map(|w| w.id);
    if let Some(window_id) = existing {
        focus_window_internal(state, window_id);
        effects.push(RuntimeEffect::FocusWindowInput(window_id));
        return;
    }
    let window_id = open_window(state, apps::default_open_request(app, viewport));
    effects.push(RuntimeEffect::FocusWindowInput(window_id));
    enforce_window_limit(state, viewport, effects);
}

fn minimize_window(state: &mut DesktopState, window_id: WindowId) {
    let order = state.next_minimize_order + 1;
    let Some(window) = state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id && !w.minimized)
    else {
        return;
    };
    window.minimized = true;
    window.is_focused = false;
    window.minimized_order = order;
    state.next_minimize_order = order;
}

fn next_in_cycle(state: &DesktopState) -> Option<WindowId> {
    let live: Vec<&WindowRecord> = state.windows.iter().filter(|w| w.is_live()).collect();
    if live.len() <= 1 {
        return None;
    }
    let next = live
        .iter()
        .position(|w| w.is_focused)
        .map_or(0, |idx| (idx + 1) % live.len());
    Some(live[next].id)
}

// Opens at most one notice while more than the comfortable number of user windows are open.
fn enforce_window_limit(
    state: &mut DesktopState,
    viewport: Option<WindowRect>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let count = state.user_window_count();
    if count <= MAX_COMFORTABLE_WINDOWS || state.has_notice() {
        return;
    }
    let message = format!("You have {count} windows open. Consider closing some!");
    let request = OpenWindowRequest::new(WindowContent::Notice(message), NOTICE_TITLE)
        .with_size(NOTICE_SIZE)
        .with_viewport(viewport);
    let window_id = open_window(state, request);
    effects.push(RuntimeEffect::ScheduleWindowClose {
        window_id,
        delay_ms: NOTICE_LIFETIME_MS,
    });
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ContentTopic, GameKind};
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };

    fn about() -> AppKey {
        AppKey::Content(ContentTopic::About)
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
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

    fn window(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window exists")
    }

    fn assert_focus_invariant(state: &DesktopState) {
        let focused: Vec<&WindowRecord> = state.windows.iter().filter(|w| w.is_focused).collect();
        assert!(focused.len() <= 1, "more than one focused window");
        if let Some(win) = focused.first() {
            assert!(!win.minimized && !win.closing);
            let top = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
            assert_eq!(win.z_index, top);
        }
    }

    #[test]
    fn open_window_focuses_and_places_inside_viewport() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(apps::default_open_request(AppKey::Terminal, Some(VIEWPORT))),
        );

        let win = &state.windows[0];
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(win.id)]);
        assert!(win.is_focused);
        assert_eq!(win.file_label, "terminal.exe");
        assert!(win.rect.x >= 20 && win.rect.x + win.rect.w <= VIEWPORT.w);
        assert!(win.rect.y >= 40 && win.rect.y + win.rect.h <= VIEWPORT.h);
    }

    #[test]
    fn focus_raises_window_above_all_others() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, AppKey::Terminal);
        let second = open(&mut state, about());
        assert!(window(&state, second).z_index > window(&state, first).z_index);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: first },
        );
        assert!(window(&state, first).is_focused);
        assert!(!window(&state, second).is_focused);
        assert!(window(&state, first).z_index > window(&state, second).z_index);
    }

    #[test]
    fn focus_invariant_holds_across_random_action_sequences() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut state = DesktopState::with_seed(7);
        let mut interaction = InteractionState::default();
        let pool = [
            AppKey::Terminal,
            about(),
            AppKey::Game(GameKind::Snake),
            AppKey::Content(ContentTopic::Files),
        ];

        for _ in 0..400 {
            let target = if state.windows.is_empty() {
                WindowId(1)
            } else {
                state.windows[rng.gen_range(0..state.windows.len())].id
            };
            let action = match rng.gen_range(0..8) {
                0 => DesktopAction::ActivateApp {
                    app: pool[rng.gen_range(0..pool.len())],
                    viewport: Some(VIEWPORT),
                },
                1 => DesktopAction::FocusWindow { window_id: target },
                2 => DesktopAction::CloseWindow { window_id: target },
                3 => DesktopAction::FinishCloseWindow { window_id: target },
                4 => DesktopAction::ToggleMinimize { window_id: target },
                5 => DesktopAction::ToggleMaximize {
                    window_id: target,
                    viewport: VIEWPORT,
                },
                6 => DesktopAction::CycleFocus,
                _ => DesktopAction::OpenWindow(apps::default_open_request(
                    pool[rng.gen_range(0..pool.len())],
                    Some(VIEWPORT),
                )),
            };
            let _ = reduce_desktop(&mut state, &mut interaction, action);
            assert_focus_invariant(&state);
        }
    }

    #[test]
    fn minimize_then_restore_preserves_window_and_reconciles_taskbar() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, about());
        let before = window(&state, id).clone();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        assert!(window(&state, id).minimized);
        assert!(!window(&state, id).is_focused);
        let entries = state.taskbar_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].window_id, id);
        assert_eq!(entries[0].label, "about.txt");

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: id },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
        let after = window(&state, id);
        assert!(after.is_focused && !after.minimized);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.content, before.content);
        assert!(state.taskbar_entries().is_empty());
    }

    #[test]
    fn taskbar_lists_minimized_windows_in_minimize_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, AppKey::Terminal);
        let second = open(&mut state, about());

        for window_id in [second, first] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMinimize { window_id },
            );
        }
        let order = state
            .taskbar_entries()
            .into_iter()
            .map(|entry| entry.window_id)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![second, first]);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: second },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FinishCloseWindow { window_id: second },
        );
        assert_eq!(state.taskbar_entries().len(), 1);
    }

    #[test]
    fn fourth_window_opens_a_single_notice_that_closes_itself() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for app in [AppKey::Terminal, about(), AppKey::Game(GameKind::Snake)] {
            open(&mut state, app);
        }
        assert!(!state.has_notice());

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app: AppKey::Game(GameKind::Pong),
                viewport: Some(VIEWPORT),
            },
        );
        let notices: Vec<&WindowRecord> = state
            .windows
            .iter()
            .filter(|w| w.content.is_notice())
            .collect();
        assert_eq!(notices.len(), 1);
        let notice = notices[0];
        assert_eq!(notice.title, "System Message");
        assert_eq!(
            notice.content,
            WindowContent::Notice("You have 4 windows open. Consider closing some!".to_string())
        );
        assert!(effects.contains(&RuntimeEffect::ScheduleWindowClose {
            window_id: notice.id,
            delay_ms: NOTICE_LIFETIME_MS,
        }));
        assert_eq!(state.user_window_count(), 4);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app: AppKey::Content(ContentTopic::Skills),
                viewport: Some(VIEWPORT),
            },
        );
        assert_eq!(
            state.windows.iter().filter(|w| w.content.is_notice()).count(),
            1
        );
    }

    #[test]
    fn notice_window_is_not_counted_as_user_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for app in [AppKey::Terminal, about(), AppKey::Game(GameKind::Snake)] {
            open(&mut state, app);
        }
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(
                WindowContent::Notice("hello".to_string()),
                "System Message",
            )),
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(state.user_window_count(), 3);
    }

    #[test]
    fn close_fades_out_then_removes_and_passes_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, AppKey::Terminal);
        let second = open(&mut state, about());

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: second },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleWindowRemoval {
                window_id: second,
                delay_ms: CLOSE_ANIMATION_MS,
            }]
        );
        assert!(window(&state, second).closing);
        assert!(window(&state, first).is_focused);

        let snapshot = state.clone();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow { window_id: second }
            ),
            Err(ReducerError::WindowNotFound(second))
        );
        assert_eq!(state, snapshot);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FinishCloseWindow { window_id: second },
        );
        assert!(state.window(second).is_none());
        assert_focus_invariant(&state);
    }

    #[test]
    fn stale_window_ids_leave_state_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, AppKey::Terminal);
        let snapshot = state.clone();
        let ghost = WindowId(99);

        for action in [
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::FinishCloseWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::RestoreWindow { window_id: ghost },
            DesktopAction::ToggleMaximize {
                window_id: ghost,
                viewport: VIEWPORT,
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::WindowNotFound(ghost))
            );
        }
        assert_eq!(state, snapshot);
    }

    #[test]
    fn drag_follows_pointer_and_stays_inside_viewport() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, about());
        let start = window(&state, id).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 100, y: 100 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 90, y: 95 },
                viewport: VIEWPORT,
            },
        );
        assert_eq!(window(&state, id).rect, start.offset(-10, -5));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 5000, y: -5000 },
                viewport: VIEWPORT,
            },
        );
        let rect = window(&state, id).rect;
        assert_eq!((rect.x, rect.y), (VIEWPORT.w - rect.w, 0));

        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximized_window_does_not_drag_and_restores_prior_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, about());
        let original = window(&state, id).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: id,
                viewport: VIEWPORT,
            },
        );
        assert_eq!(window(&state, id).rect, maximized_rect(VIEWPORT));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(interaction.dragging, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: id,
                viewport: VIEWPORT,
            },
        );
        assert_eq!(window(&state, id).rect, original);
        assert!(!window(&state, id).maximized);
    }

    #[test]
    fn activate_app_reuses_visible_window_but_not_minimized_one() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let activate = DesktopAction::ActivateApp {
            app: about(),
            viewport: Some(VIEWPORT),
        };
        reduce(&mut state, &mut interaction, activate.clone());
        let first = state.windows[0].id;
        open(&mut state, AppKey::Terminal);

        let effects = reduce(&mut state, &mut interaction, activate.clone());
        assert_eq!(state.windows.len(), 2);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(first)]);
        assert!(window(&state, first).is_focused);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: first },
        );
        reduce(&mut state, &mut interaction, activate);
        assert_eq!(state.windows.len(), 3);
    }

    #[test]
    fn cycle_focus_wraps_and_restores_minimized_target() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, AppKey::Terminal);
        let second = open(&mut state, about());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: first },
        );

        reduce(&mut state, &mut interaction, DesktopAction::CycleFocus);
        assert!(window(&state, first).is_focused);
        assert!(!window(&state, first).minimized);

        reduce(&mut state, &mut interaction, DesktopAction::CycleFocus);
        assert!(window(&state, second).is_focused);
    }

    #[test]
    fn cycle_focus_needs_two_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert!(reduce(&mut state, &mut interaction, DesktopAction::CycleFocus).is_empty());
        open(&mut state, AppKey::Terminal);
        let snapshot = state.clone();
        assert!(reduce(&mut state, &mut interaction, DesktopAction::CycleFocus).is_empty());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn preferences_persist_on_change_but_not_on_hydrate() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::SetTheme(TerminalTheme::Amber)
            ),
            vec![RuntimeEffect::PersistTheme(TerminalTheme::Amber)]
        );
        assert_eq!(
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::SetColorScheme(ColorScheme::Pink)
            ),
            vec![RuntimeEffect::PersistColorScheme(ColorScheme::Pink)]
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HydratePreferences {
                color_scheme: Some(ColorScheme::Blue),
                theme: None,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.color_scheme, ColorScheme::Blue);
        assert_eq!(state.terminal_theme, TerminalTheme::Amber);
    }

    #[test]
    fn stale_overlay_timer_keeps_newer_overlay() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let start = DesktopAction::StartMatrixOverlay {
            duration_ms: 8000,
            viewport_width: 200,
        };
        let first = reduce(&mut state, &mut interaction, start.clone());
        assert_eq!(
            first,
            vec![RuntimeEffect::ScheduleOverlayRemoval {
                generation: 1,
                delay_ms: 8000,
            }]
        );
        reduce(&mut state, &mut interaction, start);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::StopMatrixOverlay {
                generation: Some(1),
            },
        );
        let overlay = state.overlay.as_ref().expect("newer overlay survives");
        assert_eq!(overlay.generation, 2);
        assert_eq!(overlay.columns.len(), 10);
        for column in &overlay.columns {
            assert_eq!(column.glyphs.len(), MATRIX_GLYPHS_PER_COLUMN);
            assert!((2.0..5.0).contains(&column.duration_s));
            assert!((0.5..1.0).contains(&column.opacity));
        }

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::StopMatrixOverlay { generation: None },
        );
        assert_eq!(state.overlay, None);
    }

    #[test]
    fn app_commands_route_to_window_actions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let terminal = open(&mut state, AppKey::Terminal);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: terminal,
                command: AppCommand::Launch(AppKey::Game(GameKind::Snake)),
                viewport: VIEWPORT,
            },
        );
        assert!(state.windows[1].hosts(AppKey::Game(GameKind::Snake)));
        assert!(state.windows[1].is_focused);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: terminal,
                command: AppCommand::OpenExternalUrl {
                    url: "https://example.com".to_string(),
                    delay_ms: 10,
                },
                viewport: VIEWPORT,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl {
                url: "https://example.com".to_string(),
                delay_ms: 10,
            }]
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: terminal,
                command: AppCommand::CloseWindow,
                viewport: VIEWPORT,
            },
        );
        assert!(window(&state, terminal).closing);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn easter_eggs_run_without_opening_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app: AppKey::EasterEgg(EasterEgg::Surprise),
                viewport: Some(VIEWPORT),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl {
                url: SURPRISE_URL.to_string(),
                delay_ms: SURPRISE_DELAY_MS,
            }]
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateApp {
                app: AppKey::EasterEgg(EasterEgg::Matrix),
                viewport: Some(VIEWPORT),
            },
        );
        assert!(state.windows.is_empty());
        assert_eq!(
            state.overlay.as_ref().map(|overlay| overlay.columns.len()),
            Some(64)
        );
    }

    #[test]
    fn slash_shortcut_seeds_the_terminal_input() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenTerminalWithInput {
                text: "/".to_string(),
                viewport: Some(VIEWPORT),
            },
        );
        let terminal = state.windows[0].id;
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::FocusWindowInput(terminal),
                RuntimeEffect::SeedWindowInput {
                    window_id: terminal,
                    text: "/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn deep_link_activates_each_app_once() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyDeepLink {
                deep_link: DeepLinkState {
                    open: vec![about(), AppKey::Game(GameKind::Snake), about()],
                },
                viewport: Some(VIEWPORT),
            },
        );
        assert_eq!(state.windows.len(), 2);
        assert!(state.windows[0].hosts(about()));
        assert!(window(&state, state.windows[0].id).is_focused);
    }
}
