//! Collaborator Traits
//!
//! Capabilities the locomotion core needs from its host. The crate ships
//! simulation implementations ([`SimCapsule`](super::SimCapsule),
//! [`FirstPersonCamera`](crate::camera::FirstPersonCamera),
//! [`CharacterMovement`](super::CharacterMovement)); an engine binding can
//! implement these traits over its own components instead.

use glam::Vec3;

/// Collision capsule.
pub trait CharacterCapsule {
    fn half_height(&self) -> f32;
    fn set_half_height(&mut self, half_height: f32);

    /// Shrink to the crouched size.
    fn crouch(&mut self);
    /// Return from the crouched size to the size before [`crouch`](Self::crouch).
    fn uncrouch(&mut self);
    fn is_crouched(&self) -> bool;
}

/// Control rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// First-person camera attached to the capsule.
pub trait CameraRig {
    /// Position relative to the capsule center.
    fn local_offset(&self) -> Vec3;
    fn set_local_offset(&mut self, offset: Vec3);

    fn control_rotation(&self) -> ControlRotation;
    fn set_control_rotation(&mut self, rotation: ControlRotation);

    /// Add look input to the yaw axis.
    fn add_yaw_input(&mut self, amount: f32);
    /// Add look input to the pitch axis.
    fn add_pitch_input(&mut self, amount: f32);
}

/// Character movement integrator.
pub trait MovementIntegrator {
    fn max_speed(&self) -> f32;
    fn set_max_speed(&mut self, speed: f32);

    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);

    /// Accumulate a force for the next integration step (N).
    fn add_force(&mut self, force: Vec3);
    /// Accumulate a world-space movement intent for the next integration step.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
    /// Toggle ground friction applied when there is no movement input.
    fn set_braking(&mut self, enabled: bool);

    /// No ground contact (jumping or falling).
    fn is_airborne(&self) -> bool;
    /// Normal of the surface currently stood on; world-up when airborne.
    fn ground_normal(&self) -> Vec3;

    fn jump(&mut self);
    fn stop_jumping(&mut self);

    /// Consume accumulated input and forces and step the simulation.
    fn integrate(&mut self, dt: f32);
}
