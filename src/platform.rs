//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier for global shortcuts. Terminals do not forward Cmd on macOS, so
/// Control is used everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Prefix used when displaying shortcuts
#[cfg(target_os = "macos")]
pub const SHORTCUT_PREFIX: &str = "⌃";

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_PREFIX: &str = "^";

pub const THEME_KEY: char = 't';
pub const PREVIEW_KEY: char = 'p';
pub const EXPORT_KEY: char = 'e';
pub const SAVE_KEY: char = 's';
pub const OPEN_KEY: char = 'o';
/// Ctrl+I arrives as Tab in most terminals, so import is bound to L(oad)
pub const IMPORT_KEY: char = 'l';
pub const NEW_FORM_KEY: char = 'n';
pub const QUIT_KEY: char = 'c';

/// The shortcut letter of a key event, if it carries the shortcut modifier
pub fn shortcut_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(SHORTCUT_MODIFIER) => {
            Some(c.to_ascii_lowercase())
        }
        _ => None,
    }
}

/// Display form of a shortcut, e.g. `^S`
pub fn shortcut_label(key: char) -> String {
    format!("{SHORTCUT_PREFIX}{}", key.to_ascii_uppercase())
}
