//! Desktop runtime: window manager reducer, host effect execution, and the Leptos shell UI.

pub mod apps;
pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{DesktopShell, TASKBAR_HEIGHT_PX};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_preferences, PreferenceError, StoredPreferences};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
