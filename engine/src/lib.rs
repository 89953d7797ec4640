//! FPS Locomotion Engine Library
//!
//! First-person character movement core: walk, sprint, crouch and a timed
//! slide that collapses the capsule, tilts the camera and pins forward speed.
//! The core is engine-agnostic; the capsule, camera and movement integrator
//! are traits with simulation implementations for headless hosts and tests.
//!
//! # Modules
//!
//! - [`player`] - Movement modes, the transition table, slide kinematics and [`PlayerCharacter`]
//! - [`timeline`] - Curve-driven interpolation channels
//! - [`camera`] - First-person camera rig
//! - [`input`] - Key bindings and edge-detecting input dispatch
//! - [`logging`] - `env_logger` setup for hosts
//!
//! # Example
//!
//! ```ignore
//! use fps_locomotion_engine::input::{InputDispatcher, KeyBindings, KeyCode};
//! use fps_locomotion_engine::player::{MovementConfig, PlayerCharacter};
//!
//! let config = MovementConfig::load("movement.json")?;
//! let mut player = PlayerCharacter::with_defaults(&config)?;
//! let mut input = InputDispatcher::new(KeyBindings::new());
//!
//! // Sprint, then crouch to slide
//! input.handle_key(KeyCode::ShiftLeft, true);
//! input.handle_key(KeyCode::ControlLeft, true);
//!
//! loop {
//!     input.pump(&mut player);
//!     player.advance(1.0 / 60.0);
//! }
//! ```

pub mod camera;
pub mod input;
pub mod logging;
pub mod player;
pub mod timeline;

pub use camera::FirstPersonCamera;
pub use input::{InputDispatcher, KeyBindings, KeyCode};
pub use player::{MovementConfig, MovementMode, PlayerCharacter};
pub use timeline::{CurveAsset, TimelineChannel};
