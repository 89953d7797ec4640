//! Player Character
//!
//! Ties the locomotion core together: input handlers feed discrete events to
//! the movement state machine, the resulting effects drive the capsule,
//! camera, integrator and the two timelines, and [`PlayerCharacter::advance`]
//! ticks the timelines once per frame.
//!
//! # Frame Order
//!
//! Input handlers apply immediately. A host calls them for the frame's input
//! first and then calls `advance(dt)` once, so timelines started or stopped by
//! this frame's input already take effect in this frame's advancement.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::player::{MovementConfig, PlayerCharacter};
//!
//! let mut player = PlayerCharacter::with_defaults(&MovementConfig::default())?;
//! player.on_crouch_changed(|crouching| println!("crouching: {crouching}"));
//!
//! // Each frame:
//! player.on_move(Vec2::new(0.0, 1.0));
//! player.on_sprint_start();
//! player.advance(delta_time);
//! ```

use glam::{Vec2, Vec3};

use crate::camera::{FirstPersonCamera, facing_from_yaw};
use crate::timeline::TimelineChannel;

use super::capsule::SimCapsule;
use super::collaborators::{CameraRig, CharacterCapsule, MovementIntegrator};
use super::config::{ConfigError, MovementConfig, SpeedProfile};
use super::events::{CrouchChangedBroadcast, SubscriptionId};
use super::movement_controller::CharacterMovement;
use super::slide::{SlideFrame, SlideKinematics, StandingPose, pin_forward_velocity};
use super::state::{Guards, MovementEffect, MovementEvent, MovementMode, SpeedTier, transition};

/// First-person character with walk, sprint, crouch and slide.
#[derive(Debug)]
pub struct PlayerCharacter<C = SimCapsule, R = FirstPersonCamera, M = CharacterMovement> {
    capsule: C,
    camera: R,
    movement: M,
    mode: MovementMode,
    speeds: SpeedProfile,
    kinematics: SlideKinematics,
    /// Camera roll in degrees
    tilt: TimelineChannel,
    /// Slide collapse amount, 0 = standing
    slide: TimelineChannel,
    crouch_changed: CrouchChangedBroadcast,
}

impl PlayerCharacter {
    /// Character built on the simulation collaborators.
    pub fn with_defaults(config: &MovementConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            SimCapsule::new(),
            FirstPersonCamera::new(),
            CharacterMovement::new(),
        )
    }
}

impl<C, R, M> PlayerCharacter<C, R, M>
where
    C: CharacterCapsule,
    R: CameraRig,
    M: MovementIntegrator,
{
    /// Validate the config and take ownership of the collaborators.
    ///
    /// The capsule half-height and camera height are captured here as the
    /// standing pose the slide collapses from and returns to.
    pub fn new(config: &MovementConfig, capsule: C, camera: R, mut movement: M) -> Result<Self, ConfigError> {
        config.validate()?;

        let standing = StandingPose {
            half_height: capsule.half_height(),
            eye_offset: camera.local_offset().y,
        };
        movement.set_max_speed(config.speeds.walk_speed);

        Ok(Self {
            capsule,
            camera,
            movement,
            mode: MovementMode::Walk,
            speeds: config.speeds,
            kinematics: SlideKinematics::new(standing, &config.slide),
            tilt: config.tilt_channel()?,
            slide: config.slide_channel()?,
            crouch_changed: CrouchChangedBroadcast::new(),
        })
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn is_sliding(&self) -> bool {
        self.mode == MovementMode::Slide
    }

    pub fn is_crouching(&self) -> bool {
        self.mode == MovementMode::Crouch
    }

    pub fn speeds(&self) -> SpeedProfile {
        self.speeds
    }

    pub fn standing_pose(&self) -> StandingPose {
        self.kinematics.standing()
    }

    pub fn capsule(&self) -> &C {
        &self.capsule
    }

    pub fn capsule_mut(&mut self) -> &mut C {
        &mut self.capsule
    }

    pub fn camera(&self) -> &R {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut R {
        &mut self.camera
    }

    pub fn movement(&self) -> &M {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut M {
        &mut self.movement
    }

    pub fn tilt_timeline(&self) -> &TimelineChannel {
        &self.tilt
    }

    pub fn slide_timeline(&self) -> &TimelineChannel {
        &self.slide
    }

    /// Subscribe to crouch enter/exit notifications.
    pub fn on_crouch_changed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.crouch_changed.subscribe(observer)
    }

    pub fn crouch_changed_mut(&mut self) -> &mut CrouchChangedBroadcast {
        &mut self.crouch_changed
    }

    // ------------------------------------------------------------------
    // Input handlers
    // ------------------------------------------------------------------

    /// Movement axis input: `x` strafes right, `y` moves forward.
    /// Ignored while sliding.
    pub fn on_move(&mut self, value: Vec2) {
        if !self.mode.accepts_move_input() {
            return;
        }
        let forward = facing_from_yaw(self.camera.control_rotation().yaw);
        let right = Vec3::new(-forward.z, 0.0, forward.x);
        self.movement.add_movement_input(forward, value.y);
        self.movement.add_movement_input(right, value.x);
    }

    /// Look input: `x` turns right, `y` looks down. Never gated by mode.
    pub fn on_look(&mut self, value: Vec2) {
        self.camera.add_yaw_input(value.x);
        self.camera.add_pitch_input(value.y);
    }

    /// Crouched characters cannot jump.
    pub fn on_jump_start(&mut self) {
        if self.capsule.is_crouched() {
            log::debug!("jump ignored while crouched");
            return;
        }
        self.movement.jump();
    }

    pub fn on_jump_stop(&mut self) {
        self.movement.stop_jumping();
    }

    /// Crouch button: ignored airborne, slides while sprinting, otherwise toggles crouch.
    pub fn on_crouch_toggle(&mut self) {
        self.handle_event(MovementEvent::CrouchToggle);
    }

    pub fn on_sprint_start(&mut self) {
        self.handle_event(MovementEvent::SprintStart);
    }

    pub fn on_sprint_stop(&mut self) {
        self.handle_event(MovementEvent::SprintStop);
    }

    // ------------------------------------------------------------------
    // State machine plumbing
    // ------------------------------------------------------------------

    fn guards(&self) -> Guards {
        Guards {
            airborne: self.movement.is_airborne(),
            slide_available: self.slide.has_curve(),
        }
    }

    /// Feed one event to the state machine and apply its effects.
    ///
    /// Returns whether the mode changed.
    pub fn handle_event(&mut self, event: MovementEvent) -> bool {
        let from = self.mode;
        let next = transition(from, event, self.guards());
        let changed = next.changed(from);
        if changed {
            log::debug!("movement mode {from:?} -> {:?} on {event:?}", next.mode);
        }

        self.mode = next.mode;
        for effect in next.effects {
            self.apply_effect(effect);
        }
        changed
    }

    fn apply_effect(&mut self, effect: MovementEffect) {
        match effect {
            MovementEffect::SetSpeed(SpeedTier::Walk) => {
                self.movement.set_max_speed(self.speeds.walk_speed)
            }
            MovementEffect::SetSpeed(SpeedTier::Sprint) => {
                self.movement.set_max_speed(self.speeds.sprint_speed)
            }
            MovementEffect::Crouch => self.capsule.crouch(),
            MovementEffect::Uncrouch => self.capsule.uncrouch(),
            MovementEffect::BroadcastCrouch(crouching) => self.crouch_changed.broadcast(crouching),
            MovementEffect::PlayTiltFromStart => self.tilt.play_from_start(),
            MovementEffect::PlaySlideFromStart => self.slide.play_from_start(),
            MovementEffect::ReverseTilt => self.tilt.reverse(),
            MovementEffect::StopSlide => self.slide.stop(),
            MovementEffect::SetBraking(enabled) => self.movement.set_braking(enabled),
            MovementEffect::RestoreStandingPose => {
                let standing = self.kinematics.standing();
                self.capsule.set_half_height(standing.half_height);
                set_eye_offset(&mut self.camera, standing.eye_offset);
            }
        }
    }

    // ------------------------------------------------------------------
    // Per-frame
    // ------------------------------------------------------------------

    /// Advance both timelines by `dt` seconds, then step the integrator.
    ///
    /// While sliding, the forward component of velocity equals the sprint
    /// speed once this returns, whatever the step size.
    pub fn advance(&mut self, dt: f32) {
        let camera = &mut self.camera;
        self.tilt.tick_with(
            dt,
            |degrees| {
                let mut rotation = camera.control_rotation();
                rotation.roll = degrees.to_radians();
                camera.set_control_rotation(rotation);
            },
            // Nothing to do once the tilt settles; the slide owns the mode change.
            || log::trace!("camera tilt finished"),
        );

        let mut slide_finished = false;
        let kinematics = &self.kinematics;
        let sprint_speed = self.speeds.sprint_speed;
        let capsule = &mut self.capsule;
        let camera = &mut self.camera;
        let movement = &mut self.movement;
        self.slide.tick_with(
            dt,
            |amount| {
                let frame = SlideFrame {
                    ground_normal: movement.ground_normal(),
                    velocity: movement.velocity(),
                    forward: facing_from_yaw(camera.control_rotation().yaw),
                    sprint_speed,
                };
                let out = kinematics.step(amount, &frame);

                capsule.set_half_height(out.half_height);
                set_eye_offset(camera, out.eye_offset);
                if out.force != Vec3::ZERO {
                    movement.add_force(out.force);
                }
                movement.set_velocity(out.velocity);
            },
            || slide_finished = true,
        );

        if slide_finished {
            log::trace!("slide timeline finished");
            self.handle_event(MovementEvent::SlideFinished);
        }

        self.movement.integrate(dt);

        // Forces and steering during integration must not drift the slide speed.
        if self.mode == MovementMode::Slide {
            let forward = facing_from_yaw(self.camera.control_rotation().yaw);
            let velocity = self.movement.velocity();
            self.movement
                .set_velocity(pin_forward_velocity(velocity, forward, self.speeds.sprint_speed));
        }
    }
}

fn set_eye_offset<R: CameraRig>(camera: &mut R, eye_offset: f32) {
    let mut offset = camera.local_offset();
    offset.y = eye_offset;
    camera.set_local_offset(offset);
}
