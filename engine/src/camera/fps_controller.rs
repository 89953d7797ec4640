//! First-Person Camera
//!
//! Camera attached to the character capsule. Look input rotates the control
//! rotation directly with no smoothing; roll is left to gameplay code (the
//! slide tilt) and is never touched by look input.
//!
//! Key features:
//! - Direct look input → yaw/pitch (no button required)
//! - Configurable sensitivity (default: 0.002 rad per input unit)
//! - Pitch clamped to ±89 degrees to prevent gimbal lock
//! - Local offset from the capsule center, animated by crouch/slide code

use glam::Vec3;

use crate::player::{CameraRig, ControlRotation};

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Default camera offset from the capsule center: eye height 0.6m, 0.1m behind center
pub const DEFAULT_LOCAL_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.1);

/// First-person camera rig.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FirstPersonCamera::new();
///
/// // Look input (e.g. raw mouse delta)
/// camera.add_yaw_input(mouse_dx);
/// camera.add_pitch_input(mouse_dy);
///
/// let facing = facing_from_yaw(camera.yaw);
/// ```
#[derive(Clone, Debug)]
pub struct FirstPersonCamera {
    /// Offset from the capsule center
    pub local_offset: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to pitch_limits
    pub pitch: f32,
    /// Roll (radians), driven by the slide tilt
    pub roll: f32,
    /// Look sensitivity in radians per input unit (default: 0.002)
    pub sensitivity: f32,
    /// Pitch limits (min, max) in radians
    pitch_limits: (f32, f32),
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            local_offset: DEFAULT_LOCAL_OFFSET,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            sensitivity: 0.002,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl FirstPersonCamera {
    /// Create a camera with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pitch angle directly (in radians, will be clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }
}

impl CameraRig for FirstPersonCamera {
    fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    fn set_local_offset(&mut self, offset: Vec3) {
        self.local_offset = offset;
    }

    fn control_rotation(&self) -> ControlRotation {
        ControlRotation {
            pitch: self.pitch,
            yaw: self.yaw,
            roll: self.roll,
        }
    }

    fn set_control_rotation(&mut self, rotation: ControlRotation) {
        self.yaw = rotation.yaw;
        self.set_pitch(rotation.pitch);
        self.roll = rotation.roll;
    }

    /// Positive = look right
    fn add_yaw_input(&mut self, amount: f32) {
        self.yaw += amount * self.sensitivity;
    }

    /// Positive = look down
    fn add_pitch_input(&mut self, amount: f32) {
        self.set_pitch(self.pitch - amount * self.sensitivity);
    }
}

/// Yaw from a control rotation as a ground-plane facing vector.
pub fn facing_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}
