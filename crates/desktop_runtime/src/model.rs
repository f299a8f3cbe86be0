use desktop_app_contract::{AppKey, ColorScheme, TerminalTheme};
use leptos::logging;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Viewport assumed when the host cannot measure one.
pub const FALLBACK_VIEWPORT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    w: 1024,
    h: 730,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Moves the rect so it lies inside `viewport`, preferring the top-left edge when it cannot
    /// fit.
    pub fn clamped_within(self, viewport: WindowRect) -> Self {
        let max_x = viewport.x + (viewport.w - self.w).max(0);
        let max_y = viewport.y + (viewport.h - self.h).max(0);
        Self {
            x: self.x.clamp(viewport.x, max_x),
            y: self.y.clamp(viewport.y, max_y),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 20,
            y: 40,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// What a window hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    App(AppKey),
    /// Transient system message. Never counted by the too-many-windows check.
    Notice(String),
}

impl WindowContent {
    pub fn app(&self) -> Option<AppKey> {
        match self {
            Self::App(app) => Some(*app),
            Self::Notice(_) => None,
        }
    }

    pub fn is_notice(&self) -> bool {
        matches!(self, Self::Notice(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    /// Title rendered as a file name, shown in the header and taskbar.
    pub file_label: String,
    pub content: WindowContent,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    /// Minimize sequence number; orders taskbar entries.
    pub minimized_order: u64,
    pub maximized: bool,
    /// Fade-out in progress; the record is removed by `FinishCloseWindow`.
    pub closing: bool,
    pub launch_seed: u64,
}

impl WindowRecord {
    /// Whether the window still takes part in focus and stacking.
    pub fn is_live(&self) -> bool {
        !self.closing
    }

    pub fn hosts(&self, app: AppKey) -> bool {
        self.content.app() == Some(app)
    }
}

/// One falling glyph column of the matrix overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixColumn {
    pub left_px: i32,
    /// Animation duration in seconds, 2.0..5.0.
    pub duration_s: f64,
    /// 0.5..1.0.
    pub opacity: f64,
    pub glyphs: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixOverlay {
    /// Incremented per overlay so a stale removal timer never removes a newer overlay.
    pub generation: u64,
    pub columns: Vec<MatrixColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub next_z: u32,
    pub next_minimize_order: u64,
    /// Seed of the placement and overlay RNG, advanced after every draw.
    pub rng_seed: u64,
    /// Windows in open order. Stacking comes from `z_index`.
    pub windows: Vec<WindowRecord>,
    pub launcher_open: bool,
    pub color_scheme: ColorScheme,
    pub terminal_theme: TerminalTheme,
    pub overlay: Option<MatrixOverlay>,
    pub overlay_generation: u64,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_seed(0x5eed)
    }
}

impl DesktopState {
    pub fn with_seed(rng_seed: u64) -> Self {
        Self {
            next_window_id: 1,
            next_z: 0,
            next_minimize_order: 0,
            rng_seed,
            windows: Vec::new(),
            launcher_open: false,
            color_scheme: ColorScheme::default(),
            terminal_theme: TerminalTheme::default(),
            overlay: None,
            overlay_generation: 0,
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Windows counted by the too-many-windows check.
    pub fn user_window_count(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| w.is_live() && !w.content.is_notice())
            .count()
    }

    pub fn has_notice(&self) -> bool {
        self.windows.iter().any(|w| w.content.is_notice())
    }

    /// Taskbar buttons: one per minimized window, in minimize order.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let mut minimized: Vec<&WindowRecord> = self
            .windows
            .iter()
            .filter(|w| w.minimized && w.is_live())
            .collect();
        minimized.sort_by_key(|w| w.minimized_order);
        minimized
            .into_iter()
            .map(|w| TaskbarEntry {
                window_id: w.id,
                icon: w.content.app(),
                label: w.file_label.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    /// App whose icon the button shows; `None` for notices.
    pub icon: Option<AppKey>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub content: WindowContent,
    pub title: String,
    pub size: WindowSize,
    /// Explicit placement. Random placement inside the viewport when `None`.
    pub rect: Option<WindowRect>,
    pub viewport: Option<WindowRect>,
}

impl OpenWindowRequest {
    pub fn new(content: WindowContent, title: impl Into<String>) -> Self {
        Self {
            content,
            title: title.into(),
            size: WindowSize::default(),
            rect: None,
            viewport: None,
        }
    }

    pub fn with_size(mut self, size: WindowSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_viewport(mut self, viewport: Option<WindowRect>) -> Self {
        self.viewport = viewport;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Apps requested by the page URL, e.g. `/?open=about,snake`.
pub struct DeepLinkState {
    pub open: Vec<AppKey>,
}

impl DeepLinkState {
    /// Parses the comma-separated value of the `open` query parameter.
    ///
    /// Unknown keys and windowless apps are skipped with a console warning.
    pub fn from_open_param(value: &str) -> Self {
        let open = value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse::<AppKey>() {
                Ok(app) if app.opens_window() => Some(app),
                Ok(app) => {
                    logging::warn!("deep link ignores windowless app `{app}`");
                    None
                }
                Err(err) => {
                    logging::warn!("deep link ignores `{token}`: {err}");
                    None
                }
            })
            .collect();
        Self { open }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

/// Renders a window title as a pseudo file name: `"Snake Game"` becomes `snake-game.rom`.
pub fn format_title_as_file(title: &str) -> String {
    let trimmed = title.trim();
    let lower = if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_lowercase()
    };

    let mut slug = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    let has = |words: &[&str]| words.iter().any(|word| lower.contains(word));
    let extension = if has(&["snake", "pong", "game"]) {
        "rom"
    } else if has(&["about", "contact", "help"]) {
        "txt"
    } else if has(&["system", "monitor"]) {
        "sys"
    } else {
        "exe"
    };
    format!("{slug}.{extension}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_labels_follow_title_keywords() {
        assert_eq!(format_title_as_file("Snake Game"), "snake-game.rom");
        assert_eq!(format_title_as_file("About"), "about.txt");
        assert_eq!(format_title_as_file("System Monitor"), "system-monitor.sys");
        assert_eq!(format_title_as_file("Terminal"), "terminal.exe");
        assert_eq!(format_title_as_file("  --Hello,  World!-- "), "hello-world.exe");
        assert_eq!(format_title_as_file(""), "file.exe");
    }

    #[test]
    fn deep_link_keeps_known_window_apps_in_order() {
        let deep_link = DeepLinkState::from_open_param(" about, snake,,bogus,surprise,Pong ");
        assert_eq!(
            deep_link.open,
            vec![
                AppKey::Content(desktop_app_contract::ContentTopic::About),
                AppKey::Game(desktop_app_contract::GameKind::Snake),
                AppKey::Game(desktop_app_contract::GameKind::Pong),
            ]
        );
        assert!(DeepLinkState::from_open_param("").is_empty());
    }

    #[test]
    fn clamped_within_keeps_rect_inside_viewport() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 800,
            h: 600,
        };
        let rect = WindowRect {
            x: 700,
            y: -20,
            w: 200,
            h: 100,
        };
        assert_eq!(
            rect.clamped_within(viewport),
            WindowRect {
                x: 600,
                y: 0,
                w: 200,
                h: 100
            }
        );

        let oversized = WindowRect {
            x: 50,
            y: 50,
            w: 900,
            h: 700,
        };
        assert_eq!(oversized.clamped_within(viewport).x, 0);
        assert_eq!(oversized.clamped_within(viewport).y, 0);
    }
}
