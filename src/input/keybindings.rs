//! Default keybindings.
//!
//! Maps key combinations to [`Command`]s. Global bindings win; anything
//! else that produces a printable character is inserted into the focused
//! field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::form::Focus;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(key: &KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
        };
        config.setup_global_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::Submit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::Reset);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearField);

        self.global.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        self.global.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        self.global.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        // some terminals report Shift+Tab as BackTab with SHIFT set
        self.global.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        self.global.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrev);

        self.global
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    /// Resolve a key event to a command given the current focus.
    ///
    /// Key releases are ignored so terminals reporting both press and release
    /// don't double-type.
    pub fn resolve(&self, key: &KeyEvent, focus: Focus) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if let Some(cmd) = self.global.get(&KeyCombo::from(key)) {
            return Some(*cmd);
        }

        match key.code {
            KeyCode::Enter => {
                let in_message = focus.field().is_some_and(|field| field.is_multiline());
                if in_message && !key.modifiers.contains(KeyModifiers::CONTROL) {
                    Some(Command::InsertNewline)
                } else {
                    Some(Command::Activate)
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_global_bindings() {
        let config = KeybindingConfig::new();
        let focus = Focus::default();
        assert_eq!(
            config.resolve(&key(KeyCode::Esc, KeyModifiers::NONE), focus),
            Some(Command::Quit)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), focus),
            Some(Command::Quit)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Char('s'), KeyModifiers::CONTROL), focus),
            Some(Command::Submit)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Tab, KeyModifiers::NONE), focus),
            Some(Command::FocusNext)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::BackTab, KeyModifiers::SHIFT), focus),
            Some(Command::FocusPrev)
        );
    }

    #[test]
    fn test_printable_characters_insert() {
        let config = KeybindingConfig::new();
        let focus = Focus::default();
        assert_eq!(
            config.resolve(&key(KeyCode::Char('a'), KeyModifiers::NONE), focus),
            Some(Command::InsertChar('a'))
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Char('A'), KeyModifiers::SHIFT), focus),
            Some(Command::InsertChar('A'))
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Char('x'), KeyModifiers::ALT), focus),
            None
        );
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let config = KeybindingConfig::new();
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            config.resolve(&enter, Focus::Field(Field::Email)),
            Some(Command::Activate)
        );
        assert_eq!(
            config.resolve(&enter, Focus::Field(Field::Message)),
            Some(Command::InsertNewline)
        );
        assert_eq!(config.resolve(&enter, Focus::Submit), Some(Command::Activate));
        assert_eq!(
            config.resolve(
                &key(KeyCode::Enter, KeyModifiers::CONTROL),
                Focus::Field(Field::Message)
            ),
            Some(Command::Activate)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let config = KeybindingConfig::new();
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(config.resolve(&release, Focus::default()), None);
    }
}
