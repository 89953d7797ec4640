//! Slide Kinematics
//!
//! Pure math for one tick of an active slide. Given the slide curve value
//! `v` (0 = standing, 1 = fully collapsed) and the current ground contact,
//! [`SlideKinematics::step`] returns the capsule half-height, camera offset,
//! downslope force and pinned velocity the character should apply.
//!
//! World convention is Y-up; the actor's forward vector is supplied by the
//! caller.

use glam::Vec3;

use super::config::SlideConfig;

/// Normals closer to world-up than this are treated as flat ground.
const FLAT_GROUND_EPSILON: f32 = 1e-4;

/// Capsule and camera values captured once at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandingPose {
    /// Capsule half-height while standing (m)
    pub half_height: f32,
    /// Camera vertical offset while standing (m)
    pub eye_offset: f32,
}

/// Per-tick inputs read from the collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    /// Current ground-contact normal
    pub ground_normal: Vec3,
    /// Current velocity
    pub velocity: Vec3,
    /// Actor forward facing (horizontal, normalized)
    pub forward: Vec3,
    /// Speed the forward velocity component is pinned to
    pub sprint_speed: f32,
}

/// Values the character writes back after the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOutput {
    pub half_height: f32,
    pub eye_offset: f32,
    /// Force to apply this tick (N)
    pub force: Vec3,
    pub velocity: Vec3,
}

/// Slide pose interpolation between standing and collapsed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideKinematics {
    standing: StandingPose,
    slide_half_height: f32,
    slide_eye_offset: f32,
    slope_force: f32,
}

impl SlideKinematics {
    pub fn new(standing: StandingPose, config: &SlideConfig) -> Self {
        Self {
            standing,
            slide_half_height: config.half_height,
            slide_eye_offset: config.eye_offset,
            slope_force: config.slope_force,
        }
    }

    pub fn standing(&self) -> StandingPose {
        self.standing
    }

    /// Capsule half-height for curve value `v`.
    pub fn half_height(&self, v: f32) -> f32 {
        lerp(self.standing.half_height, self.slide_half_height, v)
    }

    /// Camera vertical offset for curve value `v`.
    pub fn eye_offset(&self, v: f32) -> f32 {
        lerp(self.standing.eye_offset, self.slide_eye_offset, v)
    }

    /// Full tick: pose, slope force and pinned velocity.
    pub fn step(&self, v: f32, frame: &SlideFrame) -> SlideOutput {
        SlideOutput {
            half_height: self.half_height(v),
            eye_offset: self.eye_offset(v),
            force: floor_influence(frame.ground_normal) * self.slope_force,
            velocity: pin_forward_velocity(frame.velocity, frame.forward, frame.sprint_speed),
        }
    }
}

/// Linear map of `t` from `[a, b]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Downslope direction for a ground normal.
///
/// `normalize(n x (n x up))` points along the slope plane in the direction of
/// steepest descent. Flat ground (and degenerate normals) yield zero.
pub fn floor_influence(ground_normal: Vec3) -> Vec3 {
    let n = ground_normal.normalize_or_zero();
    if n == Vec3::ZERO || n.abs_diff_eq(Vec3::Y, FLAT_GROUND_EPSILON) {
        return Vec3::ZERO;
    }
    n.cross(n.cross(Vec3::Y)).normalize_or_zero()
}

/// Replace the component of `velocity` along `forward` with `speed`.
///
/// Lateral and vertical components are kept, so slope steering accumulates
/// sideways while the slide never loses forward speed.
pub fn pin_forward_velocity(velocity: Vec3, forward: Vec3, speed: f32) -> Vec3 {
    let forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    if forward == Vec3::ZERO {
        return velocity;
    }
    let along = velocity.dot(forward);
    velocity + forward * (speed - along)
}
