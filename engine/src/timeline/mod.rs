//! Timeline Module
//!
//! Time-driven interpolation channels. A [`TimelineChannel`] advances a
//! normalized playback position over a fixed duration and samples a
//! [`Curve`] at that position every tick.
//!
//! # Components
//!
//! - [`TimelineChannel`] - Play / reverse / stop driver with per-tick and finished callbacks
//! - [`Curve`] - Normalized time to scalar mapping (closures and [`CurveAsset`])
//! - [`CurveAsset`] - Designer-authored curve, loadable from JSON

pub mod channel;
pub mod curve;

pub use channel::{PlaybackDirection, TimelineChannel, TimelineError, TimelineStep};
pub use curve::{Curve, CurveAsset, CurveKey};
