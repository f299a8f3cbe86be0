//! Shared contract types between the desktop window manager runtime and the apps it hosts.
//!
//! Apps never touch runtime state directly. They receive an [`AppMountContext`] when their
//! window mounts and talk back through [`AppHost::send`] with [`AppCommand`] values.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod appearance;

use std::{fmt, str::FromStr};

use leptos::{Callable, Callback, Signal, SignalGetUntracked, View};
use serde::{Deserialize, Serialize};
pub use site_content::ContentTopic;

pub use appearance::{ColorScheme, SchemePalette, TerminalTheme, ThemePalette};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Real-time game hosted in its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameKind {
    /// Grid snake.
    Snake,
    /// Paddle tennis against the terminal.
    Pong,
}

/// Launchable one-shot effect with no window of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EasterEgg {
    /// Opens a surprise link after a short delay.
    Surprise,
    /// Falling-glyph overlay across the viewport.
    Matrix,
}

/// Closed set of launchable apps.
///
/// Serialized as its slug (`"terminal"`, `"about"`, `"snake"`, `"neo"`), which is also what the
/// launcher, deep links, and the app catalog use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AppKey {
    /// Interactive terminal session.
    Terminal,
    /// Static content window.
    Content(ContentTopic),
    /// Game window.
    Game(GameKind),
    /// Windowless effect.
    EasterEgg(EasterEgg),
}

/// Error returned when a slug names no app.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown app `{0}`")]
pub struct ParseAppKeyError(pub String);

impl AppKey {
    /// Every app key, in launcher order.
    pub const ALL: [Self; 13] = [
        Self::Terminal,
        Self::Content(ContentTopic::Files),
        Self::Content(ContentTopic::Help),
        Self::Content(ContentTopic::SystemInfo),
        Self::Content(ContentTopic::About),
        Self::Content(ContentTopic::Projects),
        Self::Content(ContentTopic::Skills),
        Self::Content(ContentTopic::Contact),
        Self::Game(GameKind::Snake),
        Self::Game(GameKind::Pong),
        Self::Content(ContentTopic::Quote),
        Self::EasterEgg(EasterEgg::Surprise),
        Self::EasterEgg(EasterEgg::Matrix),
    ];

    /// Stable slug.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Content(topic) => topic.as_str(),
            Self::Game(GameKind::Snake) => "snake",
            Self::Game(GameKind::Pong) => "pong",
            Self::EasterEgg(EasterEgg::Surprise) => "surprise",
            Self::EasterEgg(EasterEgg::Matrix) => "neo",
        }
    }

    /// Window title used when this app opens.
    pub const fn window_title(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Content(topic) => topic.title(),
            Self::Game(GameKind::Snake) => "Snake Game",
            Self::Game(GameKind::Pong) => "Pong Game",
            Self::EasterEgg(EasterEgg::Surprise) => "Surprise",
            Self::EasterEgg(EasterEgg::Matrix) => "Matrix",
        }
    }

    /// Whether launching this app opens a window.
    pub const fn opens_window(self) -> bool {
        !matches!(self, Self::EasterEgg(_))
    }
}

impl fmt::Display for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKey {
    type Err = ParseAppKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let slug = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == slug)
            .ok_or(ParseAppKeyError(slug))
    }
}

impl TryFrom<String> for AppKey {
    type Error = ParseAppKeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<AppKey> for String {
    fn from(key: AppKey) -> Self {
        key.as_str().to_string()
    }
}

/// DOM id of the primary input inside a window, focused when the window opens.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("desktop-window-input-{window_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Requests an app sends to the desktop runtime.
pub enum AppCommand {
    /// Activate an app: focus its open window or open a new one.
    Launch(AppKey),
    /// Close the window hosting the sender.
    CloseWindow,
    /// Switch and persist the desktop color scheme.
    SetColorScheme(ColorScheme),
    /// Switch and persist the terminal theme.
    SetTheme(TerminalTheme),
    /// Open a URL in a new browsing context after `delay_ms`.
    OpenExternalUrl {
        /// Target URL.
        url: String,
        /// Delay before navigating.
        delay_ms: u32,
    },
    /// Show the falling-glyph overlay for `duration_ms`.
    StartMatrixOverlay {
        /// Time before the overlay removes itself.
        duration_ms: u32,
    },
    /// Remove the falling-glyph overlay if present.
    StopMatrixOverlay,
}

#[derive(Clone, Copy)]
/// Per-window channel back to the runtime.
pub struct AppHost {
    window_id: WindowRuntimeId,
    sender: Callback<AppCommand>,
    theme: Signal<TerminalTheme>,
}

impl AppHost {
    /// Creates a host handle for one window.
    pub fn new(
        window_id: WindowRuntimeId,
        sender: Callback<AppCommand>,
        theme: Signal<TerminalTheme>,
    ) -> Self {
        Self {
            window_id,
            sender,
            theme,
        }
    }

    /// Window this handle belongs to.
    pub fn window_id(&self) -> WindowRuntimeId {
        self.window_id
    }

    /// Reactive terminal theme.
    pub fn theme(&self) -> Signal<TerminalTheme> {
        self.theme
    }

    /// Current terminal theme without subscribing.
    pub fn theme_untracked(&self) -> TerminalTheme {
        self.theme.get_untracked()
    }

    /// Sends one command to the runtime.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Context injected by the runtime when an app window mounts.
pub struct AppMountContext {
    /// App hosted by the window.
    pub app: AppKey,
    /// Runtime window id.
    pub window_id: WindowRuntimeId,
    /// Per-window seed for deterministic randomness.
    pub launch_seed: u64,
    /// Channel back to the runtime.
    pub host: AppHost,
}

/// Static app mount function used by the runtime app table.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
