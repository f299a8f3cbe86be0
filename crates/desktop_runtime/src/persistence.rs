//! Preference persistence for the color scheme and terminal theme.
//!
//! Both values are stored as their plain lower-case names through the injected [`PrefsStore`],
//! one slot per key.
//! They are read once at boot and written whenever the user changes them.

use desktop_app_contract::{ColorScheme, TerminalTheme};
use leptos::logging;
use platform_host::{load_pref_with, PrefsStore};
use thiserror::Error;

/// Storage key of the selected [`ColorScheme`].
pub const COLOR_SCHEME_KEY: &str = "rivs_colorScheme";
/// Storage key of the selected [`TerminalTheme`].
pub const THEME_KEY: &str = "rivs_theme";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure reading or writing a preference slot.
pub enum PreferenceError {
    /// The store failed or held a value that does not decode.
    #[error("failed to load preference `{key}`: {message}")]
    Load {
        /// Storage key.
        key: &'static str,
        /// Store or decode failure.
        message: String,
    },
    /// The store rejected the write.
    #[error("failed to save preference `{key}`: {message}")]
    Save {
        /// Storage key.
        key: &'static str,
        /// Store failure.
        message: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Preferences found in the store at boot. Missing or unreadable slots are `None`.
pub struct StoredPreferences {
    pub color_scheme: Option<ColorScheme>,
    pub theme: Option<TerminalTheme>,
}

/// Reads the stored color scheme.
///
/// # Errors
///
/// Returns [`PreferenceError::Load`] when the store fails or the stored value is not a scheme.
pub async fn load_color_scheme(
    store: &dyn PrefsStore,
) -> Result<Option<ColorScheme>, PreferenceError> {
    load_pref_with(store, COLOR_SCHEME_KEY, ColorScheme::parse)
        .await
        .map_err(|message| PreferenceError::Load {
            key: COLOR_SCHEME_KEY,
            message,
        })
}

/// Reads the stored terminal theme.
///
/// # Errors
///
/// Returns [`PreferenceError::Load`] when the store fails or the stored value is not a theme.
pub async fn load_theme(store: &dyn PrefsStore) -> Result<Option<TerminalTheme>, PreferenceError> {
    load_pref_with(store, THEME_KEY, TerminalTheme::parse)
        .await
        .map_err(|message| PreferenceError::Load {
            key: THEME_KEY,
            message,
        })
}

/// Loads every boot preference, logging and skipping slots that fail to read.
pub async fn load_preferences(store: &dyn PrefsStore) -> StoredPreferences {
    let color_scheme = load_color_scheme(store).await.unwrap_or_else(|err| {
        logging::warn!("{err}");
        None
    });
    let theme = load_theme(store).await.unwrap_or_else(|err| {
        logging::warn!("{err}");
        None
    });
    StoredPreferences {
        color_scheme,
        theme,
    }
}

/// Persists the selected color scheme.
///
/// # Errors
///
/// Returns [`PreferenceError::Save`] when the store rejects the write.
pub async fn persist_color_scheme(
    store: &dyn PrefsStore,
    scheme: ColorScheme,
) -> Result<(), PreferenceError> {
    store
        .save_pref(COLOR_SCHEME_KEY, scheme.as_str())
        .await
        .map_err(|message| PreferenceError::Save {
            key: COLOR_SCHEME_KEY,
            message,
        })
}

/// Persists the selected terminal theme.
///
/// # Errors
///
/// Returns [`PreferenceError::Save`] when the store rejects the write.
pub async fn persist_theme(
    store: &dyn PrefsStore,
    theme: TerminalTheme,
) -> Result<(), PreferenceError> {
    store
        .save_pref(THEME_KEY, theme.as_str())
        .await
        .map_err(|message| PreferenceError::Save {
            key: THEME_KEY,
            message,
        })
}
