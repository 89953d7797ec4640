//! Input Dispatcher
//!
//! Turns raw key and mouse events into calls on the [`PlayerCharacter`] input
//! handlers. Button actions are forwarded on their edges in arrival order;
//! the movement axis and accumulated look delta are forwarded once per pump.
//!
//! | Action  | Press               | Release            |
//! |---------|---------------------|--------------------|
//! | Jump    | `on_jump_start`     | `on_jump_stop`     |
//! | Sprint  | `on_sprint_start`   | `on_sprint_stop`   |
//! | Crouch  | `on_crouch_toggle`  | -                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut input = InputDispatcher::new(KeyBindings::new());
//!
//! // From the window event loop:
//! input.handle_key(KeyCode::ShiftLeft, true);
//! input.handle_mouse_motion(dx, dy);
//!
//! // Once per frame, before advancing the character:
//! input.pump(&mut player);
//! player.advance(delta_time);
//! ```

use glam::Vec2;

use crate::player::{CameraRig, CharacterCapsule, MovementIntegrator, PlayerCharacter};

use super::bindings::{InputAction, KeyBindings};
use super::keyboard::{KeyCode, KeyboardState};

/// A button action edge waiting to be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEdge {
    Pressed(InputAction),
    Released(InputAction),
}

/// Buffers input between frames and forwards it to a character.
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    bindings: KeyBindings,
    keyboard: KeyboardState,
    pending: Vec<ActionEdge>,
    look_delta: Vec2,
}

impl InputDispatcher {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Record a key event.
    ///
    /// An edge is queued only when the action as a whole changes: repeats,
    /// stray releases and a second key for an already-held action are dropped.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let Some(action) = self.bindings.get_action(key).filter(|action| !action.is_axis()) else {
            self.keyboard.handle_key(key, pressed);
            return;
        };

        let was_held = self.is_held(action);
        if !self.keyboard.handle_key(key, pressed) || self.is_held(action) == was_held {
            return;
        }
        self.pending.push(if pressed {
            ActionEdge::Pressed(action)
        } else {
            ActionEdge::Released(action)
        });
    }

    /// Accumulate raw mouse motion. Positive `dx` looks right, positive `dy` looks down.
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Release every held key, e.g. when the window loses focus.
    ///
    /// Held buttons produce release edges so a sprint or jump is not left latched.
    pub fn release_all(&mut self) {
        let mut released: Vec<InputAction> = Vec::new();
        for key in self.keyboard.release_all() {
            match self.bindings.get_action(key) {
                Some(action) if !action.is_axis() && !released.contains(&action) => {
                    released.push(action)
                }
                _ => {}
            }
        }
        self.pending
            .extend(released.into_iter().map(ActionEdge::Released));
    }

    fn is_held(&self, action: InputAction) -> bool {
        self.bindings
            .is_action_pressed(action, self.keyboard.pressed_keys())
    }

    /// Current movement axis from held keys: `x` = right, `y` = forward.
    pub fn move_axis(&self) -> Vec2 {
        let held = |action| if self.is_held(action) { 1.0 } else { 0.0 };
        Vec2::new(
            held(InputAction::MoveRight) - held(InputAction::MoveLeft),
            held(InputAction::MoveForward) - held(InputAction::MoveBack),
        )
    }

    pub fn pending(&self) -> &[ActionEdge] {
        &self.pending
    }

    /// Forward this frame's input to the character.
    pub fn pump<C, R, M>(&mut self, player: &mut PlayerCharacter<C, R, M>)
    where
        C: CharacterCapsule,
        R: CameraRig,
        M: MovementIntegrator,
    {
        for edge in self.pending.drain(..) {
            match edge {
                ActionEdge::Pressed(InputAction::Jump) => player.on_jump_start(),
                ActionEdge::Released(InputAction::Jump) => player.on_jump_stop(),
                ActionEdge::Pressed(InputAction::Sprint) => player.on_sprint_start(),
                ActionEdge::Released(InputAction::Sprint) => player.on_sprint_stop(),
                ActionEdge::Pressed(InputAction::Crouch) => player.on_crouch_toggle(),
                _ => {}
            }
        }

        let axis = self.move_axis();
        if axis != Vec2::ZERO {
            player.on_move(axis);
        }

        let look = std::mem::take(&mut self.look_delta);
        if look != Vec2::ZERO {
            player.on_look(look);
        }
    }
}
