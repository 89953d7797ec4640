//! Slide Simulator
//!
//! Headless run of the locomotion core on the simulation collaborators.
//! Scripts a sprint, a slide and the recovery to walking over a fixed
//! timestep and logs the trajectory.
//!
//! Run with: `cargo run --bin slide_sim -- --frames 180 -v`
//!
//! Script:
//! - frame 0: hold W and Shift (sprint forward)
//! - `--slide-at`: tap Ctrl (slide)
//! - `--slide-at` + 15: release Shift (ignored mid-slide)
//! - rest: keep holding W until the slide recovers to walking

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use log::info;

use fps_locomotion_engine::input::{InputDispatcher, KeyBindings, KeyCode};
use fps_locomotion_engine::logging;
use fps_locomotion_engine::player::{
    CameraRig, CharacterCapsule, MovementConfig, PlayerCharacter,
};

/// Scripted sprint-slide-recover simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON movement config; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 180)]
    frames: u32,

    /// Frame on which the crouch key is tapped
    #[arg(long, default_value_t = 30)]
    slide_at: u32,

    /// Ground slope in degrees, falling away toward +X
    #[arg(long, default_value_t = 0.0)]
    slope: f32,

    /// Log every Nth frame
    #[arg(long, default_value_t = 6)]
    every: u32,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    if !args.dt.is_finite() || args.dt <= 0.0 {
        return Err(format!("timestep must be positive, got {}", args.dt).into());
    }

    let config = match &args.config {
        Some(path) => {
            info!("loading movement config from {}", path.display());
            MovementConfig::load(path)?
        }
        None => MovementConfig::default(),
    };

    let mut player = PlayerCharacter::with_defaults(&config)?;
    player.on_crouch_changed(|crouching| info!("crouch changed: {crouching}"));

    let slope = args.slope.to_radians();
    player
        .movement_mut()
        .set_ground_normal(Vec3::new(slope.sin(), slope.cos(), 0.0));

    let mut input = InputDispatcher::new(KeyBindings::new());
    let every = args.every.max(1);

    for frame in 0..args.frames {
        if frame == 0 {
            input.handle_key(KeyCode::W, true);
            input.handle_key(KeyCode::ShiftLeft, true);
        }
        if frame == args.slide_at {
            input.handle_key(KeyCode::ControlLeft, true);
        }
        if frame == args.slide_at + 1 {
            input.handle_key(KeyCode::ControlLeft, false);
        }
        if frame == args.slide_at + 15 {
            input.handle_key(KeyCode::ShiftLeft, false);
        }

        input.pump(&mut player);
        player.advance(args.dt);

        if frame % every == 0 || frame + 1 == args.frames {
            let movement = player.movement();
            info!(
                "t={:6.3}s mode={:<6} half_height={:.3} eye={:.3} roll={:6.2}deg speed={:5.2} pos=({:.2}, {:.2}, {:.2})",
                (frame + 1) as f32 * args.dt,
                format!("{:?}", player.mode()),
                player.capsule().half_height(),
                player.camera().local_offset().y,
                player.camera().control_rotation().roll.to_degrees(),
                movement.horizontal_speed(),
                movement.position().x,
                movement.position().y,
                movement.position().z,
            );
        }
    }

    info!(
        "finished in {:?} after {} frames, travelled {:.2}m",
        player.mode(),
        args.frames,
        player.movement().position().length()
    );
    Ok(())
}
