//! Input Module
//!
//! Platform-agnostic key and mouse handling for the locomotion controls.
//! Decoupled from any specific windowing system: hosts translate native
//! events into [`KeyCode`] presses and raw mouse deltas.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_locomotion_engine::input::{InputDispatcher, KeyBindings, KeyCode};
//!
//! let mut input = InputDispatcher::new(KeyBindings::new());
//! input.handle_key(KeyCode::W, true);
//! input.pump(&mut player);
//! ```

pub mod bindings;
pub mod dispatcher;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use dispatcher::{ActionEdge, InputDispatcher};
pub use keyboard::{KeyCode, KeyboardState};
