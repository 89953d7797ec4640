//! Keyboard Input Module
//!
//! Held-key tracking with press/release edge detection. Decoupled from any
//! windowing system: hosts translate their native key events into [`KeyCode`].

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    C,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event.
    ///
    /// Returns `true` only on an edge: OS key repeat (press while held) and
    /// stray releases return `false`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key)
        }
    }

    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Release everything, returning the keys that were held.
    pub fn release_all(&mut self) -> Vec<KeyCode> {
        self.pressed.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_are_edges() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.handle_key(KeyCode::W, true));
        assert!(keyboard.pressed_keys().contains(&KeyCode::W));
        assert!(keyboard.handle_key(KeyCode::W, false));
        assert!(!keyboard.pressed_keys().contains(&KeyCode::W));
    }

    #[test]
    fn test_key_repeat_is_not_an_edge() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Space, true);
        assert!(!keyboard.handle_key(KeyCode::Space, true));
    }

    #[test]
    fn test_stray_release_is_not_an_edge() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.handle_key(KeyCode::C, false));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.handle_key(KeyCode::Unknown, true));
        assert!(keyboard.pressed_keys().is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::W, true);
        keyboard.handle_key(KeyCode::ShiftLeft, true);
        let mut released = keyboard.release_all();
        released.sort_by_key(|key| format!("{key:?}"));
        assert_eq!(released, vec![KeyCode::ShiftLeft, KeyCode::W]);
        assert!(keyboard.pressed_keys().is_empty());
    }
}
