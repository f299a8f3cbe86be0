//! App catalog and mount table.
//!
//! Launcher metadata comes from `app_catalog.toml`, validated and embedded by `build.rs`. Mount
//! functions live here because they tie catalog keys to concrete app crates.

mod content;

use std::sync::OnceLock;

use desktop_app_contract::{AppKey, AppModule, GameKind};
use leptos::logging;
use serde::Deserialize;

use crate::model::{OpenWindowRequest, WindowContent, WindowRect, WindowSize};

pub use content::NoticeView;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum AppCategory {
    System,
    Info,
    Games,
    Fun,
}

impl AppCategory {
    pub const ALL: [Self; 4] = [Self::System, Self::Info, Self::Games, Self::Fun];

    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Info => "Info",
            Self::Games => "Games",
            Self::Fun => "Fun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    pub key: AppKey,
    pub name: String,
    pub category: AppCategory,
    pub desktop_label: String,
    pub show_on_desktop: bool,
    pub pinned: bool,
    width: i32,
    height: i32,
}

impl AppDescriptor {
    pub fn window_size(&self) -> WindowSize {
        WindowSize {
            w: self.width,
            h: self.height,
        }
    }

    /// CSS class selecting the app's icon glyph.
    pub fn icon_class(&self) -> String {
        format!("app-icon app-icon-{}", self.key.as_str())
    }
}

pub fn app_registry() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("app catalog failed to load: {err}");
            Vec::new()
        })
    })
}

pub fn app_descriptor(app: AppKey) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.key == app)
}

pub fn desktop_icon_apps() -> Vec<&'static AppDescriptor> {
    app_registry()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn pinned_apps() -> Vec<&'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.pinned).collect()
}

/// Launcher sections in category order. Empty categories are skipped.
pub fn launcher_sections() -> Vec<(AppCategory, Vec<&'static AppDescriptor>)> {
    AppCategory::ALL
        .into_iter()
        .map(|category| {
            let apps = app_registry()
                .iter()
                .filter(|entry| entry.category == category)
                .collect::<Vec<_>>();
            (category, apps)
        })
        .filter(|(_, apps)| !apps.is_empty())
        .collect()
}

/// Window request for launching `app` with its catalog defaults.
pub fn default_open_request(app: AppKey, viewport: Option<WindowRect>) -> OpenWindowRequest {
    let size = app_descriptor(app)
        .map(AppDescriptor::window_size)
        .unwrap_or_default();
    OpenWindowRequest::new(WindowContent::App(app), app.window_title())
        .with_size(size)
        .with_viewport(viewport)
}

/// Mountable module for a windowed app. Windowless apps have none.
pub fn app_module(app: AppKey) -> Option<AppModule> {
    match app {
        AppKey::Terminal => Some(AppModule::new(desktop_app_terminal::mount)),
        AppKey::Game(GameKind::Snake) => Some(AppModule::new(desktop_app_snake::mount)),
        AppKey::Game(GameKind::Pong) => Some(AppModule::new(desktop_app_pong::mount)),
        AppKey::Content(_) => Some(AppModule::new(content::mount)),
        AppKey::EasterEgg(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ContentTopic, EasterEgg};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_lists_every_app_once() {
        let keys = app_registry().iter().map(|entry| entry.key).collect::<Vec<_>>();
        assert_eq!(keys.len(), AppKey::ALL.len());
        for key in AppKey::ALL {
            assert!(keys.contains(&key), "{key} missing from catalog");
        }
    }

    #[test]
    fn launcher_groups_follow_category_order() {
        let sections = launcher_sections();
        let categories = sections.iter().map(|(category, _)| *category).collect::<Vec<_>>();
        assert_eq!(categories, AppCategory::ALL.to_vec());
        let games = sections
            .iter()
            .find(|(category, _)| *category == AppCategory::Games)
            .map(|(_, apps)| apps.iter().map(|entry| entry.key).collect::<Vec<_>>());
        assert_eq!(
            games,
            Some(vec![
                AppKey::Game(GameKind::Snake),
                AppKey::Game(GameKind::Pong)
            ])
        );
    }

    #[test]
    fn default_request_uses_catalog_size_and_contract_title() {
        let request = default_open_request(AppKey::Game(GameKind::Snake), None);
        assert_eq!(request.title, "Snake Game");
        assert_eq!(request.size, WindowSize { w: 440, h: 520 });
        assert_eq!(request.content, WindowContent::App(AppKey::Game(GameKind::Snake)));
    }

    #[test]
    fn easter_eggs_have_no_window_module() {
        assert!(app_module(AppKey::EasterEgg(EasterEgg::Matrix)).is_none());
        assert!(app_module(AppKey::Terminal).is_some());
        assert!(app_module(AppKey::Content(ContentTopic::Quote)).is_some());
    }
}
