//! Keyboard event types.
//!
//! A [`KeyEvent`] is an immutable record of one key action as delivered by
//! the host's input subsystem: the action (press or release), the key
//! identifier, the active modifier flags, and the logical key character
//! where one exists.

use bitflags::bitflags;
use std::fmt;

/// The type of key action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyAction {
    /// Key was pressed down.
    #[default]
    Press,
    /// Key was released.
    Release,
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::Press => write!(f, "press"),
            KeyAction::Release => write!(f, "release"),
        }
    }
}

/// Identifies a key on the keyboard.
///
/// Only the keys the harness can act on are distinguished; anything else
/// the host delivers maps to [`KeyCode::Other`] and is ignored by the
/// built-in command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Escape key.
    Esc,
    /// Enter/Return key.
    Enter,
    /// A key the harness does not distinguish.
    Other(u32),
}

impl KeyCode {
    /// Returns true if this is an arrow key.
    #[must_use]
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Esc => write!(f, "escape"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Other(code) => write!(f, "other({code})"),
        }
    }
}

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// Multiple modifiers can be combined using bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier.
        const ALT = 0b0000_0100;
        /// Super/Windows/Command modifier.
        const SUPER = 0b0000_1000;
        /// Meta modifier.
        const META = 0b0001_0000;
    }
}

impl KeyModifiers {
    /// Returns true if the meta or super (command) modifier is held.
    #[must_use]
    pub fn has_meta(&self) -> bool {
        self.intersects(KeyModifiers::META | KeyModifiers::SUPER)
    }
}

/// An immutable record of one key action.
///
/// # Examples
///
/// ```
/// use lumen_input::{KeyCode, KeyEvent, KeyModifiers};
///
/// let event = KeyEvent::press(KeyCode::Up).with_modifiers(KeyModifiers::META);
/// assert!(event.is_press());
/// assert!(event.modifiers.has_meta());
/// assert_eq!(event.character(), None);
///
/// let event = KeyEvent::release(KeyCode::Char('F'));
/// assert_eq!(event.character(), Some('F'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Press or release.
    pub action: KeyAction,
    /// The key identifier.
    pub code: KeyCode,
    /// Modifier flags active when the event was produced.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Creates a key event with no modifiers.
    #[must_use]
    pub const fn new(action: KeyAction, code: KeyCode) -> Self {
        Self {
            action,
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Creates a press event with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self::new(KeyAction::Press, code)
    }

    /// Creates a release event with no modifiers.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self::new(KeyAction::Release, code)
    }

    /// Sets the modifier flags.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns true if this is a press event.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.action == KeyAction::Press
    }

    /// Returns true if this is a release event.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.action == KeyAction::Release
    }

    /// Returns the logical character for this key, if it has one.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} {}", self.action, self.code)
        } else {
            write!(f, "{} {:?}+{}", self.action, self.modifiers, self.code)
        }
    }
}
