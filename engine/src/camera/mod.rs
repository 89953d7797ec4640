//! Camera Module
//!
//! First-person camera rig. Window-system agnostic: only camera state and math.

pub mod fps_controller;

pub use fps_controller::{DEFAULT_LOCAL_OFFSET, FirstPersonCamera, facing_from_yaw};
