//! Color schemes and terminal themes selectable from the terminal.

use serde::{Deserialize, Serialize};

/// Accent palette applied to the whole desktop through CSS variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Neon green, the boot default.
    #[default]
    Green,
    /// Purple.
    Purple,
    /// Blue.
    Blue,
    /// Orange.
    Orange,
    /// Pink.
    Pink,
}

/// Three CSS colors making up a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemePalette {
    /// `--neon-green`.
    pub primary: &'static str,
    /// `--neon-pink`.
    pub secondary: &'static str,
    /// `--neon-cyan`.
    pub accent: &'static str,
}

impl ColorScheme {
    /// Every scheme in listing order.
    pub const ALL: [Self; 5] = [
        Self::Green,
        Self::Purple,
        Self::Blue,
        Self::Orange,
        Self::Pink,
    ];

    /// Stable lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Pink => "pink",
        }
    }

    /// Parses a scheme name, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == wanted)
    }

    /// `green, purple, blue, orange, pink`.
    pub fn names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }

    /// CSS colors for this scheme.
    pub const fn palette(self) -> SchemePalette {
        match self {
            Self::Green => SchemePalette {
                primary: "#00ff88",
                secondary: "#ff6b9d",
                accent: "#4dd0e1",
            },
            Self::Purple => SchemePalette {
                primary: "#b366ff",
                secondary: "#ff1493",
                accent: "#00ffff",
            },
            Self::Blue => SchemePalette {
                primary: "#00ccff",
                secondary: "#ff00ff",
                accent: "#ffff00",
            },
            Self::Orange => SchemePalette {
                primary: "#ff8800",
                secondary: "#00ffff",
                accent: "#ffff00",
            },
            Self::Pink => SchemePalette {
                primary: "#ff1493",
                secondary: "#00ff88",
                accent: "#ffff00",
            },
        }
    }
}

/// Background and text preset for terminal windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalTheme {
    /// Transparent background, neon green text.
    #[default]
    Default,
    /// Amber phosphor.
    Amber,
    /// Grey on black.
    Monochrome,
    /// White-on-blue DOS look with green text.
    Dos,
}

/// Terminal background and foreground colors. `background` is `None` for "inherit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// CSS background color.
    pub background: Option<&'static str>,
    /// CSS text color.
    pub foreground: &'static str,
}

impl TerminalTheme {
    /// Every theme in listing order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Amber, Self::Monochrome, Self::Dos];

    // Multi-word names are matched after whitespace is collapsed.
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("green screen", Self::Default),
        ("amber glow", Self::Amber),
        ("mono", Self::Monochrome),
        ("black and white", Self::Monochrome),
        ("classic dos", Self::Dos),
        ("ms dos", Self::Dos),
        ("ms-dos", Self::Dos),
    ];

    /// Stable lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Amber => "amber",
            Self::Monochrome => "monochrome",
            Self::Dos => "dos",
        }
    }

    /// Parses a theme name or alias. Case and runs of whitespace are ignored, so
    /// `"Classic   DOS"` resolves like `"classic dos"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == wanted)
            .or_else(|| {
                Self::ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == wanted)
                    .map(|(_, theme)| *theme)
            })
    }

    /// `default, amber, monochrome, dos`.
    pub fn names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }

    /// Colors for this theme.
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Default => ThemePalette {
                background: None,
                foreground: "#00ff88",
            },
            Self::Amber => ThemePalette {
                background: Some("#1a1a0a"),
                foreground: "#ffb000",
            },
            Self::Monochrome => ThemePalette {
                background: Some("#0f0f0f"),
                foreground: "#cccccc",
            },
            Self::Dos => ThemePalette {
                background: Some("#0000aa"),
                foreground: "#00ff00",
            },
        }
    }

    /// Inline CSS for a terminal container.
    pub fn container_style(self) -> String {
        let palette = self.palette();
        match palette.background {
            Some(background) => format!("background-color:{background};color:{};", palette.foreground),
            None => format!("color:{};", palette.foreground),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schemes_parse_case_insensitively() {
        assert_eq!(ColorScheme::parse(" Purple "), Some(ColorScheme::Purple));
        assert_eq!(ColorScheme::parse("teal"), None);
        assert_eq!(ColorScheme::names(), "green, purple, blue, orange, pink");
    }

    #[test]
    fn themes_accept_multi_word_aliases() {
        assert_eq!(TerminalTheme::parse("classic   DOS"), Some(TerminalTheme::Dos));
        assert_eq!(TerminalTheme::parse("amber glow"), Some(TerminalTheme::Amber));
        assert_eq!(TerminalTheme::parse("amber"), Some(TerminalTheme::Amber));
        assert_eq!(TerminalTheme::parse("neon"), None);
    }

    #[test]
    fn default_theme_inherits_background() {
        assert_eq!(TerminalTheme::Default.container_style(), "color:#00ff88;");
        assert_eq!(
            TerminalTheme::Amber.container_style(),
            "background-color:#1a1a0a;color:#ffb000;"
        );
    }

    #[test]
    fn preferences_serialize_as_plain_names() {
        assert_eq!(
            serde_json::to_string(&TerminalTheme::Monochrome).expect("theme"),
            "\"monochrome\""
        );
        assert_eq!(
            serde_json::from_str::<ColorScheme>("\"orange\"").expect("scheme"),
            ColorScheme::Orange
        );
    }
}
