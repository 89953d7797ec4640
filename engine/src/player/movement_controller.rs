//! Character Movement
//!
//! Simulation integrator for headless hosts and tests. Implements
//! [`MovementIntegrator`] on a flat ground plane at `y = 0`.
//!
//! # Physics Model
//!
//! - Max speed starts at walk speed; the character overrides it per mode
//! - Input accelerates toward `direction * max_speed` at 50 m/s^2
//! - Without input a grounded character brakes at 30 m/s^2, unless braking
//!   is switched off (the slide does this so its pinned speed holds)
//! - Forces are divided by an 80 kg mass
//! - Gravity 20 m/s^2, jump velocity 8 m/s, 0.1 s of coyote time
//!
//! The reported ground normal can be tilted with
//! [`CharacterMovement::set_ground_normal`] to emulate a slope without
//! modelling slope geometry.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::player::{CharacterMovement, MovementIntegrator};
//!
//! let mut movement = CharacterMovement::new();
//! movement.add_movement_input(Vec3::NEG_Z, 1.0);
//! movement.integrate(delta_time);
//! let position = movement.position();
//! ```

use glam::Vec3;

use super::collaborators::MovementIntegrator;
use super::config::WALK_SPEED;

/// Acceleration toward the requested velocity (m/s^2)
pub const ACCELERATION: f32 = 50.0;

/// Braking without input while grounded (m/s^2)
pub const DECELERATION: f32 = 30.0;

/// Upward velocity applied by a jump (m/s)
pub const JUMP_VELOCITY: f32 = 8.0;

/// Downward acceleration while airborne (m/s^2)
pub const GRAVITY: f32 = 20.0;

/// Mass used to turn forces into acceleration (kg)
pub const MASS: f32 = 80.0;

/// Window after leaving the ground in which a jump is still accepted (s)
pub const COYOTE_TIME: f32 = 0.1;

/// Step sizes outside this range are clamped before integrating.
const DT_RANGE: (f32, f32) = (0.0001, 0.1);

/// Flat-ground movement integrator.
#[derive(Debug, Clone)]
pub struct CharacterMovement {
    /// Feet position; the ground is the `y = 0` plane
    position: Vec3,
    velocity: Vec3,
    max_speed: f32,
    grounded: bool,
    /// Ground braking without input
    braking: bool,
    coyote_remaining: f32,
    /// Normal reported while grounded
    ground_normal: Vec3,
    /// Movement intent since the last `integrate`
    intent: Vec3,
    /// Force (N) since the last `integrate`
    force: Vec3,
    jump_requested: bool,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            max_speed: WALK_SPEED,
            grounded: true,
            braking: true,
            coyote_remaining: COYOTE_TIME,
            ground_normal: Vec3::Y,
            intent: Vec3::ZERO,
            force: Vec3::ZERO,
            jump_requested: false,
        }
    }
}

impl CharacterMovement {
    /// Standing still at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport. Grounded state is re-evaluated on the next integration.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Speed in the XZ plane.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// Set the normal reported while grounded.
    pub fn set_ground_normal(&mut self, normal: Vec3) {
        self.ground_normal = normal.normalize_or(Vec3::Y);
    }

    pub fn is_braking(&self) -> bool {
        self.braking
    }

    /// Movement intent waiting for the next integration.
    pub fn pending_input(&self) -> Vec3 {
        self.intent
    }

    fn can_jump(&self) -> bool {
        self.grounded || self.coyote_remaining > 0.0
    }

    /// Steer toward the requested velocity, brake, or coast.
    fn steer(&self, dt: f32) -> Vec3 {
        let current = Vec3::new(self.velocity.x, 0.0, self.velocity.z);
        let intent = Vec3::new(self.intent.x, 0.0, self.intent.z);

        if intent.length_squared() > 0.001 {
            let target = intent.normalize() * self.max_speed * intent.length().min(1.0);
            let step = ACCELERATION * dt;
            let diff = target - current;
            return if diff.length() <= step {
                target
            } else {
                current + diff.normalize() * step
            };
        }

        if !(self.grounded && self.braking) {
            return current;
        }
        let speed = current.length();
        let step = DECELERATION * dt;
        if speed <= step {
            Vec3::ZERO
        } else {
            current * ((speed - step) / speed)
        }
    }
}

impl MovementIntegrator for CharacterMovement {
    fn max_speed(&self) -> f32 {
        self.max_speed
    }

    fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.intent += direction * scale;
    }

    fn set_braking(&mut self, enabled: bool) {
        self.braking = enabled;
    }

    fn is_airborne(&self) -> bool {
        !self.grounded
    }

    fn ground_normal(&self) -> Vec3 {
        if self.grounded { self.ground_normal } else { Vec3::Y }
    }

    fn jump(&mut self) {
        self.jump_requested = true;
    }

    fn stop_jumping(&mut self) {
        self.jump_requested = false;
    }

    /// Order: jump, steering, forces, gravity, position, ground contact.
    fn integrate(&mut self, dt: f32) {
        let dt = dt.clamp(DT_RANGE.0, DT_RANGE.1);

        if std::mem::take(&mut self.jump_requested) && self.can_jump() {
            self.velocity.y = JUMP_VELOCITY;
            self.grounded = false;
            self.coyote_remaining = 0.0;
        }

        let horizontal = self.steer(dt);
        self.velocity.x = horizontal.x;
        self.velocity.z = horizontal.z;
        self.velocity += std::mem::take(&mut self.force) / MASS * dt;

        if !self.grounded {
            self.velocity.y -= GRAVITY * dt;
            self.coyote_remaining = (self.coyote_remaining - dt).max(0.0);
        }

        self.position += self.velocity * dt;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = self.velocity.y.max(0.0);
            self.grounded = true;
            self.coyote_remaining = COYOTE_TIME;
        } else if self.grounded {
            // Walked off or was lifted: coyote window starts now
            self.grounded = false;
            self.coyote_remaining = COYOTE_TIME;
        }

        self.intent = Vec3::ZERO;
    }
}
