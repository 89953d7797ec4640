//! State Machine Tests - Transition Table
//!
//! Every (mode, event, guards) combination the movement modes react to, plus
//! the ones they must ignore.

use fps_locomotion_engine::player::{
    Guards, MovementEffect as E, MovementEvent as Ev, MovementMode as M, SpeedTier, transition,
};
use rstest::rstest;

const GROUNDED: Guards = Guards {
    airborne: false,
    slide_available: true,
};

const AIRBORNE: Guards = Guards {
    airborne: true,
    slide_available: true,
};

const NO_SLIDE_CURVE: Guards = Guards {
    airborne: false,
    slide_available: false,
};

// ============================================================================
// Transitions that change mode
// ============================================================================

#[rstest]
#[case::walk_sprints(M::Walk, Ev::SprintStart, M::Sprint, vec![E::SetSpeed(SpeedTier::Sprint)])]
#[case::sprint_walks(M::Sprint, Ev::SprintStop, M::Walk, vec![E::SetSpeed(SpeedTier::Walk)])]
#[case::walk_crouches(M::Walk, Ev::CrouchToggle, M::Crouch, vec![E::Crouch, E::BroadcastCrouch(true)])]
#[case::crouch_stands(M::Crouch, Ev::CrouchToggle, M::Walk, vec![E::Uncrouch, E::BroadcastCrouch(false)])]
#[case::sprint_slides(M::Sprint, Ev::CrouchToggle, M::Slide, vec![E::PlayTiltFromStart, E::PlaySlideFromStart, E::SetBraking(false)])]
#[case::slide_recovers(
    M::Slide,
    Ev::SlideFinished,
    M::Walk,
    vec![
        E::ReverseTilt,
        E::StopSlide,
        E::SetBraking(true),
        E::RestoreStandingPose,
        E::SetSpeed(SpeedTier::Walk),
    ]
)]
fn grounded_transitions(
    #[case] from: M,
    #[case] event: Ev,
    #[case] to: M,
    #[case] effects: Vec<E>,
) {
    let next = transition(from, event, GROUNDED);
    assert_eq!(next.mode, to);
    assert_eq!(next.effects, effects);
    assert!(next.changed(from));
}

// ============================================================================
// Events that leave the mode alone
// ============================================================================

#[rstest]
#[case::sprint_start_while_sprinting(M::Sprint, Ev::SprintStart)]
#[case::sprint_stop_while_walking(M::Walk, Ev::SprintStop)]
#[case::sprint_start_while_crouched(M::Crouch, Ev::SprintStart)]
#[case::sprint_stop_while_crouched(M::Crouch, Ev::SprintStop)]
#[case::sprint_start_while_sliding(M::Slide, Ev::SprintStart)]
#[case::sprint_stop_while_sliding(M::Slide, Ev::SprintStop)]
#[case::crouch_while_sliding(M::Slide, Ev::CrouchToggle)]
#[case::stray_slide_finished_walking(M::Walk, Ev::SlideFinished)]
#[case::stray_slide_finished_sprinting(M::Sprint, Ev::SlideFinished)]
fn ignored_events(#[case] mode: M, #[case] event: Ev) {
    let next = transition(mode, event, GROUNDED);
    assert_eq!(next.mode, mode);
    assert!(next.effects.is_empty());
}

#[rstest]
#[case::walking(M::Walk)]
#[case::sprinting(M::Sprint)]
#[case::crouched(M::Crouch)]
#[case::sliding(M::Slide)]
fn crouch_toggle_ignored_while_airborne(#[case] mode: M) {
    let next = transition(mode, Ev::CrouchToggle, AIRBORNE);
    assert_eq!(next.mode, mode);
    assert!(next.effects.is_empty());
}

#[rstest]
fn sprint_still_works_while_airborne() {
    let next = transition(M::Walk, Ev::SprintStart, AIRBORNE);
    assert_eq!(next.mode, M::Sprint);
}

#[rstest]
fn sprint_crouch_without_slide_curve_stays_sprinting() {
    let next = transition(M::Sprint, Ev::CrouchToggle, NO_SLIDE_CURVE);
    assert_eq!(next.mode, M::Sprint);
    assert!(next.effects.is_empty());
}

#[rstest]
fn sprint_then_crouch_never_crouches() {
    let sprinting = transition(M::Walk, Ev::SprintStart, GROUNDED).mode;
    let next = transition(sprinting, Ev::CrouchToggle, GROUNDED);
    assert_eq!(next.mode, M::Slide);
    assert!(!next.effects.contains(&E::Crouch));
}

#[rstest]
fn only_slide_suppresses_move_input() {
    assert!(M::Walk.accepts_move_input());
    assert!(M::Sprint.accepts_move_input());
    assert!(M::Crouch.accepts_move_input());
    assert!(!M::Slide.accepts_move_input());
}
