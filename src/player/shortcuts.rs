/// Keyboard shortcuts handled by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    ToggleMute,
    SkipBackward,
    SkipForward,
    ToggleFullscreen,
    CloseMenus,
}

/// Modifier keys held during a keydown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

/// What kind of element the keydown was aimed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyFocus {
    #[default]
    Page,
    /// Text fields, selects and contenteditable regions take every key.
    TextEntry,
    /// Range inputs keep their arrow and paging keys.
    Slider,
}

const SLIDER_KEYS: [&str; 8] = [
    "ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "Home", "End", "PageUp", "PageDown",
];

impl KeyModifiers {
    fn any(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

impl Shortcut {
    /// Resolve a `KeyboardEvent.key` / `KeyboardEvent.code` pair.
    ///
    /// Chorded keys are left to the browser.
    pub fn from_key(key: &str, code: &str, modifiers: KeyModifiers) -> Option<Self> {
        if modifiers.any() {
            return None;
        }
        if key == " " || key == "Spacebar" || code == "Space" {
            return Some(Self::TogglePlay);
        }
        match key {
            "ArrowLeft" => return Some(Self::SkipBackward),
            "ArrowRight" => return Some(Self::SkipForward),
            "Escape" | "Esc" => return Some(Self::CloseMenus),
            _ => {}
        }
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch.to_ascii_lowercase(),
            _ => return None,
        };
        match letter {
            'k' => Some(Self::TogglePlay),
            'm' => Some(Self::ToggleMute),
            'j' => Some(Self::SkipBackward),
            'l' => Some(Self::SkipForward),
            'f' => Some(Self::ToggleFullscreen),
            _ => None,
        }
    }

    /// Like [`Self::from_key`], but leaves keys to the focused element when
    /// it needs them.
    pub fn for_focus(
        key: &str,
        code: &str,
        modifiers: KeyModifiers,
        focus: KeyFocus,
    ) -> Option<Self> {
        match focus {
            KeyFocus::TextEntry => None,
            KeyFocus::Slider if SLIDER_KEYS.contains(&key) => None,
            _ => Self::from_key(key, code, modifiers),
        }
    }

    /// Whether handling this shortcut counts as user activity for the
    /// controls auto-hide timer.
    pub fn shows_controls(&self) -> bool {
        !matches!(self, Self::ToggleFullscreen | Self::CloseMenus)
    }
}

/// Rows for the shortcuts hint panel.
pub const SHORTCUT_HINTS: [(&str, &str); 5] = [
    ("Space / K", "Play / Pause"),
    ("← / J", "Back 10 seconds"),
    ("→ / L", "Forward 10 seconds"),
    ("M", "Mute / Unmute"),
    ("F", "Fullscreen"),
];
