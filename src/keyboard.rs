//! Keyboard Module - Key events and crossterm conversion.
//!
//! Bridges crossterm's event system to the framework-local keyboard event
//! type the widget consumes. A host event loop reads crossterm events and
//! forwards converted ones to the focused widget.
//!
//! # API
//!
//! - `KeyboardEvent` / `Modifiers` / `KeyState` - Event types
//! - `convert_key_event` - Convert a crossterm KeyEvent
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::{read, Event};
//! use phone_input::keyboard::convert_key_event;
//!
//! if let Ok(Event::Key(key)) = read() {
//!     widget.handle_key(&convert_key_event(key));
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "5", "Enter", "Backspace")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// The typed character, if this event carries exactly one.
    pub fn char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_key_char() {
        let event = convert_key_event(key_event(KeyCode::Char('7'), KeyModifiers::empty()));

        assert_eq!(event.key, "7");
        assert_eq!(event.state, KeyState::Press);
        assert!(!event.modifiers.ctrl);
        assert_eq!(event.char(), Some('7'));
    }

    #[test]
    fn test_convert_key_special() {
        let cases = [
            (KeyCode::Enter, "Enter"),
            (KeyCode::Backspace, "Backspace"),
            (KeyCode::Delete, "Delete"),
            (KeyCode::Tab, "Tab"),
            (KeyCode::Esc, "Escape"),
            (KeyCode::Home, "Home"),
            (KeyCode::End, "End"),
        ];

        for (code, expected) in cases {
            let event = convert_key_event(key_event(code, KeyModifiers::empty()));
            assert_eq!(event.key, expected);
            assert_eq!(event.char(), None);
        }
    }

    #[test]
    fn test_convert_key_with_modifiers() {
        let event = convert_key_event(key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));

        assert!(event.modifiers.ctrl);
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.alt);
    }

    #[test]
    fn test_convert_key_states() {
        let states = [
            (crossterm::event::KeyEventKind::Press, KeyState::Press),
            (crossterm::event::KeyEventKind::Repeat, KeyState::Repeat),
            (crossterm::event::KeyEventKind::Release, KeyState::Release),
        ];

        for (kind, expected) in states {
            let crossterm_event = CrosstermKeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::empty(),
                kind,
                state: crossterm::event::KeyEventState::NONE,
            };

            let event = convert_key_event(crossterm_event);
            assert_eq!(event.state, expected);
        }
    }

    #[test]
    fn test_keyboard_event_constructors() {
        let event = KeyboardEvent::new("Enter");
        assert!(event.is_press());
        assert_eq!(event.modifiers, Modifiers::none());

        let event = KeyboardEvent::with_modifiers("a", Modifiers::ctrl());
        assert!(event.modifiers.ctrl);
    }
}
