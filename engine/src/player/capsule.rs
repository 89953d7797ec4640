//! Player Capsule
//!
//! Simulation capsule used by headless hosts and tests.
//!
//! # Sizes
//!
//! - Standing: 0.96m half-height (1.92m tall)
//! - Crouched: 0.44m half-height
//! - Radius: 0.55m
//!
//! Crouching is instant; the slide animates the half-height directly through
//! [`CharacterCapsule::set_half_height`].

use super::collaborators::CharacterCapsule;

/// Standing capsule half-height in meters
pub const STANDING_HALF_HEIGHT: f32 = 0.96;

/// Crouched capsule half-height in meters
pub const CROUCHED_HALF_HEIGHT: f32 = 0.44;

/// Capsule radius in meters
pub const CAPSULE_RADIUS: f32 = 0.55;

/// A capsule with an engine-style crouch.
#[derive(Debug, Clone, PartialEq)]
pub struct SimCapsule {
    half_height: f32,
    radius: f32,
    crouched_half_height: f32,
    /// Half-height to return to on uncrouch; `Some` while crouched
    pre_crouch_half_height: Option<f32>,
}

impl Default for SimCapsule {
    fn default() -> Self {
        Self {
            half_height: STANDING_HALF_HEIGHT,
            radius: CAPSULE_RADIUS,
            crouched_half_height: CROUCHED_HALF_HEIGHT,
            pre_crouch_half_height: None,
        }
    }
}

impl SimCapsule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capsule with custom standing and crouched half-heights.
    pub fn with_half_heights(standing: f32, crouched: f32) -> Self {
        Self {
            half_height: standing,
            crouched_half_height: crouched,
            ..Default::default()
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn crouched_half_height(&self) -> f32 {
        self.crouched_half_height
    }

    /// Full height from bottom to top in meters.
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }
}

impl CharacterCapsule for SimCapsule {
    fn half_height(&self) -> f32 {
        self.half_height
    }

    fn set_half_height(&mut self, half_height: f32) {
        self.half_height = half_height;
    }

    fn crouch(&mut self) {
        if self.pre_crouch_half_height.is_none() {
            self.pre_crouch_half_height = Some(self.half_height);
            self.half_height = self.crouched_half_height;
        }
    }

    fn uncrouch(&mut self) {
        if let Some(previous) = self.pre_crouch_half_height.take() {
            self.half_height = previous;
        }
    }

    fn is_crouched(&self) -> bool {
        self.pre_crouch_half_height.is_some()
    }
}
