//! Player Module
//!
//! First-person locomotion: walk, sprint, crouch and a timed slide with
//! camera tilt.
//!
//! # Components
//!
//! - [`PlayerCharacter`] - Input handlers, mode state machine and per-frame timeline advancement
//! - [`transition`] - Pure mode transition table returning [`MovementEffect`] commands
//! - [`SlideKinematics`] - Slide pose interpolation, slope force and forward velocity pinning
//! - [`MovementConfig`] - Tunable speeds, slide parameters and curves, loadable from JSON
//! - [`CrouchChangedBroadcast`] - Observers of crouch enter/exit
//! - Collaborator traits ([`CharacterCapsule`], [`CameraRig`], [`MovementIntegrator`])
//!   with simulation implementations [`SimCapsule`] and [`CharacterMovement`]

pub mod capsule;
pub mod character;
pub mod collaborators;
pub mod config;
pub mod events;
pub mod movement_controller;
pub mod slide;
pub mod state;

pub use capsule::{CAPSULE_RADIUS, CROUCHED_HALF_HEIGHT, STANDING_HALF_HEIGHT, SimCapsule};
pub use character::PlayerCharacter;
pub use collaborators::{CameraRig, CharacterCapsule, ControlRotation, MovementIntegrator};
pub use config::{
    ConfigError, MovementConfig, SLIDE_DURATION, SLIDE_EYE_OFFSET, SLIDE_HALF_HEIGHT, SLOPE_FORCE,
    SPRINT_SPEED, SlideConfig, SpeedProfile, TILT_DURATION, WALK_SPEED,
};
pub use events::{CrouchChangedBroadcast, SubscriptionId};
pub use movement_controller::{
    ACCELERATION, COYOTE_TIME, CharacterMovement, DECELERATION, GRAVITY, JUMP_VELOCITY, MASS,
};
pub use slide::{SlideFrame, SlideKinematics, SlideOutput, StandingPose, floor_influence};
pub use state::{Guards, MovementEffect, MovementEvent, MovementMode, SpeedTier, Transition, transition};
