//! Movement State Machine
//!
//! Decides which locomotion mode is active. The machine is a pure function
//! from `(mode, event, guards)` to the next mode plus a list of
//! [`MovementEffect`] commands; the character applies the effects.
//!
//! # Transitions
//!
//! | From   | Event          | Guard                       | To     |
//! |--------|----------------|-----------------------------|--------|
//! | Walk   | SprintStart    |                             | Sprint |
//! | Sprint | SprintStop     |                             | Walk   |
//! | Walk   | CrouchToggle   | grounded                    | Crouch |
//! | Crouch | CrouchToggle   | grounded                    | Walk   |
//! | Sprint | CrouchToggle   | grounded, slide available   | Slide  |
//! | Slide  | SlideFinished  |                             | Walk   |
//!
//! Every other combination leaves the mode alone and produces no effects.

/// Active locomotion mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementMode {
    #[default]
    Walk,
    Sprint,
    Crouch,
    Slide,
}

impl MovementMode {
    /// Whether direct movement input is honoured in this mode.
    pub fn accepts_move_input(&self) -> bool {
        !matches!(self, MovementMode::Slide)
    }
}

/// Discrete events that drive the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementEvent {
    SprintStart,
    SprintStop,
    /// The overloaded crouch button: crouch, uncrouch or slide.
    CrouchToggle,
    /// The slide timeline completed its run.
    SlideFinished,
}

/// Environment predicates evaluated just before a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guards {
    /// The integrator reports no ground contact
    pub airborne: bool,
    /// A slide curve is configured, so a slide can actually run to completion
    pub slide_available: bool,
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            airborne: false,
            slide_available: true,
        }
    }
}

/// Which configured speed to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTier {
    Walk,
    Sprint,
}

/// Side effects requested by a transition, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEffect {
    SetSpeed(SpeedTier),
    /// Shrink the capsule to its crouched size
    Crouch,
    /// Restore the capsule from its crouched size
    Uncrouch,
    /// Notify crouch observers
    BroadcastCrouch(bool),
    PlayTiltFromStart,
    PlaySlideFromStart,
    ReverseTilt,
    StopSlide,
    /// Snap capsule and camera back to their standing values
    RestoreStandingPose,
    /// Switch the integrator's no-input ground braking on or off
    SetBraking(bool),
}

/// Outcome of feeding one event to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub mode: MovementMode,
    pub effects: Vec<MovementEffect>,
}

impl Transition {
    fn stay(mode: MovementMode) -> Self {
        Self {
            mode,
            effects: Vec::new(),
        }
    }

    fn to(mode: MovementMode, effects: &[MovementEffect]) -> Self {
        Self {
            mode,
            effects: effects.to_vec(),
        }
    }

    /// Whether the event changed the mode.
    pub fn changed(&self, from: MovementMode) -> bool {
        self.mode != from
    }
}

/// Compute the next mode and its effects.
pub fn transition(mode: MovementMode, event: MovementEvent, guards: Guards) -> Transition {
    use MovementEffect as E;
    use MovementEvent as Ev;
    use MovementMode as M;

    match (mode, event) {
        (M::Walk, Ev::SprintStart) => Transition::to(M::Sprint, &[E::SetSpeed(SpeedTier::Sprint)]),
        (M::Sprint, Ev::SprintStop) => Transition::to(M::Walk, &[E::SetSpeed(SpeedTier::Walk)]),

        (_, Ev::CrouchToggle) if guards.airborne => Transition::stay(mode),
        (M::Walk, Ev::CrouchToggle) => {
            Transition::to(M::Crouch, &[E::Crouch, E::BroadcastCrouch(true)])
        }
        (M::Crouch, Ev::CrouchToggle) => {
            Transition::to(M::Walk, &[E::Uncrouch, E::BroadcastCrouch(false)])
        }
        (M::Sprint, Ev::CrouchToggle) if guards.slide_available => {
            Transition::to(
                M::Slide,
                &[E::PlayTiltFromStart, E::PlaySlideFromStart, E::SetBraking(false)],
            )
        }

        (M::Slide, Ev::SlideFinished) => Transition::to(
            M::Walk,
            &[
                E::ReverseTilt,
                E::StopSlide,
                E::SetBraking(true),
                E::RestoreStandingPose,
                E::SetSpeed(SpeedTier::Walk),
            ],
        ),

        _ => Transition::stay(mode),
    }
}
