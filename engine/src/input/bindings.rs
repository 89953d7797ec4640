//! Input Bindings Module
//!
//! Maps physical keys to the locomotion actions. Several keys may drive the
//! same action (both shift keys sprint, arrows mirror WASD); an action is held
//! while any of its keys is held.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical locomotion actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    /// Held to sprint
    Sprint,
    /// Held to jump; release ends the jump request
    Jump,
    /// Pressed to toggle crouch, or to slide while sprinting
    Crouch,
}

impl InputAction {
    /// Whether the action feeds the movement axis rather than a button handler.
    pub fn is_axis(self) -> bool {
        matches!(
            self,
            InputAction::MoveForward
                | InputAction::MoveBack
                | InputAction::MoveLeft
                | InputAction::MoveRight
        )
    }
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    actions: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    /// WASD and arrows move, Space jumps, either Shift sprints, Left Ctrl or C crouches.
    fn default() -> Self {
        let mut bindings = Self::empty();
        for (key, action) in [
            (KeyCode::W, InputAction::MoveForward),
            (KeyCode::ArrowUp, InputAction::MoveForward),
            (KeyCode::S, InputAction::MoveBack),
            (KeyCode::ArrowDown, InputAction::MoveBack),
            (KeyCode::A, InputAction::MoveLeft),
            (KeyCode::ArrowLeft, InputAction::MoveLeft),
            (KeyCode::D, InputAction::MoveRight),
            (KeyCode::ArrowRight, InputAction::MoveRight),
            (KeyCode::Space, InputAction::Jump),
            (KeyCode::ShiftLeft, InputAction::Sprint),
            (KeyCode::ShiftRight, InputAction::Sprint),
            (KeyCode::ControlLeft, InputAction::Crouch),
            (KeyCode::C, InputAction::Crouch),
        ] {
            bindings.bind(key, action);
        }
        bindings
    }
}

impl KeyBindings {
    /// The default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// No keys bound.
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing whatever the key did before.
    /// Other keys bound to `action` keep working.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.actions.insert(key, action);
    }

    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.actions.get(&key).copied()
    }

    /// Whether any key bound to `action` is in `pressed_keys`.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        pressed_keys
            .iter()
            .any(|&key| self.get_action(key) == Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(keys: &[KeyCode]) -> HashSet<KeyCode> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_default_layout() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.get_action(KeyCode::ShiftRight), Some(InputAction::Sprint));
        assert_eq!(bindings.get_action(KeyCode::C), Some(InputAction::Crouch));
        assert_eq!(bindings.get_action(KeyCode::Unknown), None);
    }

    #[test]
    fn test_either_shift_sprints() {
        let bindings = KeyBindings::new();
        assert!(bindings.is_action_pressed(InputAction::Sprint, &pressed(&[KeyCode::ShiftLeft])));
        assert!(bindings.is_action_pressed(InputAction::Sprint, &pressed(&[KeyCode::ShiftRight])));
        assert!(!bindings.is_action_pressed(InputAction::Sprint, &pressed(&[KeyCode::W])));
    }

    #[test]
    fn test_rebinding_a_key_moves_it_to_the_new_action() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::C, InputAction::Jump);

        assert_eq!(bindings.get_action(KeyCode::C), Some(InputAction::Jump));
        // Left Ctrl still crouches
        assert!(bindings.is_action_pressed(InputAction::Crouch, &pressed(&[KeyCode::ControlLeft])));
        assert!(!bindings.is_action_pressed(InputAction::Crouch, &pressed(&[KeyCode::C])));
    }

    #[test]
    fn test_empty_binds_nothing() {
        let bindings = KeyBindings::empty();
        assert_eq!(bindings.get_action(KeyCode::W), None);
        assert!(!bindings.is_action_pressed(InputAction::MoveForward, &pressed(&[KeyCode::W])));
    }

    #[test]
    fn test_axis_actions() {
        assert!(InputAction::MoveLeft.is_axis());
        assert!(!InputAction::Jump.is_axis());
        assert!(!InputAction::Sprint.is_axis());
        assert!(!InputAction::Crouch.is_axis());
    }
}
