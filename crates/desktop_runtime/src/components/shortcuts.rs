//! Global keyboard shortcut decoding.

/// Desktop-wide shortcuts handled by the shell root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GlobalShortcut {
    /// Ctrl+Alt+T.
    OpenTerminal,
    /// Alt+Tab.
    CycleFocus,
    /// Bare `/` while no form field has focus.
    SlashToTerminal,
}

/// Modifier state and key of one `keydown` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub form_field_focused: bool,
}

impl<'a> KeyChord<'a> {
    pub(super) fn from_event(ev: &'a web_sys::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            form_field_focused: super::a11y::is_form_field_focused(),
        }
    }
}

pub(super) fn decode_shortcut(chord: KeyChord<'_>) -> Option<GlobalShortcut> {
    if chord.ctrl && chord.alt && chord.key.eq_ignore_ascii_case("t") {
        return Some(GlobalShortcut::OpenTerminal);
    }
    if chord.alt && !chord.ctrl && !chord.meta && chord.key == "Tab" {
        return Some(GlobalShortcut::CycleFocus);
    }
    if chord.key == "/" && !chord.ctrl && !chord.alt && !chord.meta && !chord.form_field_focused {
        return Some(GlobalShortcut::SlashToTerminal);
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chord(key: &str) -> KeyChord<'_> {
        KeyChord {
            key,
            ..KeyChord::default()
        }
    }

    #[test]
    fn modifier_shortcuts_decode() {
        assert_eq!(
            decode_shortcut(KeyChord {
                ctrl: true,
                alt: true,
                ..chord("T")
            }),
            Some(GlobalShortcut::OpenTerminal)
        );
        assert_eq!(
            decode_shortcut(KeyChord {
                alt: true,
                ..chord("Tab")
            }),
            Some(GlobalShortcut::CycleFocus)
        );
        assert_eq!(
            decode_shortcut(KeyChord {
                alt: true,
                form_field_focused: true,
                ..chord("Tab")
            }),
            Some(GlobalShortcut::CycleFocus)
        );
        assert_eq!(decode_shortcut(chord("Tab")), None);
        assert_eq!(
            decode_shortcut(KeyChord {
                ctrl: true,
                ..chord("t")
            }),
            None
        );
    }

    #[test]
    fn slash_is_ignored_while_typing_in_a_field() {
        assert_eq!(
            decode_shortcut(chord("/")),
            Some(GlobalShortcut::SlashToTerminal)
        );
        assert_eq!(
            decode_shortcut(KeyChord {
                form_field_focused: true,
                ..chord("/")
            }),
            None
        );
    }
}
