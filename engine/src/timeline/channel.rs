//! Timeline Channel
//!
//! A reusable driven-interpolation channel. The channel owns a duration, an
//! optional curve and a normalized playback position; it holds no game state.
//! Every tick it advances the position, samples the curve and reports the
//! result through the callbacks passed to [`TimelineChannel::tick_with`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::timeline::{CurveAsset, TimelineChannel};
//!
//! let mut tilt = TimelineChannel::new(0.25)?.with_curve(CurveAsset::Linear);
//! tilt.play_from_start();
//!
//! // Each frame:
//! tilt.tick_with(delta_time, |roll| camera.set_roll(roll), || {});
//! ```

use static_assertions::assert_impl_all;
use thiserror::Error;

use super::curve::Curve;

/// Errors raised while configuring a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimelineError {
    /// Duration must be finite and strictly positive.
    #[error("timeline duration must be positive and finite, got {0}")]
    InvalidDuration(f32),
}

/// Direction the playback position is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackDirection {
    Forward,
    Reverse,
    #[default]
    Stopped,
}

/// Result of a single tick that actually advanced the channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStep {
    /// Playback position after the tick, in `[0, 1]`
    pub position: f32,
    /// Curve value at `position`
    pub value: f32,
    /// Whether this tick completed the run
    pub finished: bool,
}

/// One animated property driven over a fixed duration.
pub struct TimelineChannel {
    duration: f32,
    curve: Option<Box<dyn Curve + Send + Sync>>,
    position: f32,
    direction: PlaybackDirection,
}

assert_impl_all!(TimelineChannel: Send, Sync);

impl std::fmt::Debug for TimelineChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineChannel")
            .field("duration", &self.duration)
            .field("has_curve", &self.curve.is_some())
            .field("position", &self.position)
            .field("direction", &self.direction)
            .finish()
    }
}

impl TimelineChannel {
    /// Create an idle channel without a curve.
    ///
    /// Rejects zero, negative and non-finite durations.
    pub fn new(duration: f32) -> Result<Self, TimelineError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TimelineError::InvalidDuration(duration));
        }
        Ok(Self {
            duration,
            curve: None,
            position: 0.0,
            direction: PlaybackDirection::Stopped,
        })
    }

    /// Attach a curve, consuming and returning the channel.
    pub fn with_curve<C>(mut self, curve: C) -> Self
    where
        C: Curve + Send + Sync + 'static,
    {
        self.set_curve(curve);
        self
    }

    /// Replace the curve.
    pub fn set_curve<C>(&mut self, curve: C)
    where
        C: Curve + Send + Sync + 'static,
    {
        self.curve = Some(Box::new(curve));
    }

    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Normalized playback position in `[0, 1]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn direction(&self) -> PlaybackDirection {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.direction != PlaybackDirection::Stopped
    }

    /// Resume forward playback from the current position.
    pub fn play(&mut self) {
        self.direction = PlaybackDirection::Forward;
    }

    /// Restart forward playback from position 0.
    pub fn play_from_start(&mut self) {
        self.position = 0.0;
        self.direction = PlaybackDirection::Forward;
    }

    /// Play backwards from the current position.
    pub fn reverse(&mut self) {
        self.direction = PlaybackDirection::Reverse;
    }

    /// Halt immediately. Never fires the finished callback.
    pub fn stop(&mut self) {
        self.direction = PlaybackDirection::Stopped;
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns `None` when nothing happened: the channel is stopped, has no
    /// curve, or `dt` is not a usable step.
    pub fn tick(&mut self, dt: f32) -> Option<TimelineStep> {
        let curve = self.curve.as_ref()?;
        let sign = match self.direction {
            PlaybackDirection::Forward => 1.0,
            PlaybackDirection::Reverse => -1.0,
            PlaybackDirection::Stopped => return None,
        };
        if !dt.is_finite() || dt < 0.0 {
            return None;
        }

        self.position = (self.position + sign * dt / self.duration).clamp(0.0, 1.0);
        let value = curve.evaluate(self.position);

        let boundary = match self.direction {
            PlaybackDirection::Forward => self.position >= 1.0,
            _ => self.position <= 0.0,
        };
        if boundary {
            self.direction = PlaybackDirection::Stopped;
        }

        Some(TimelineStep {
            position: self.position,
            value,
            finished: boundary,
        })
    }

    /// Advance by `dt` seconds, reporting through callbacks.
    ///
    /// `on_update` receives the curve value after every advancing tick;
    /// `on_finished` runs once when the run reaches its boundary, after
    /// `on_update`.
    pub fn tick_with<U, F>(&mut self, dt: f32, mut on_update: U, on_finished: F) -> Option<TimelineStep>
    where
        U: FnMut(f32),
        F: FnOnce(),
    {
        let step = self.tick(dt)?;
        on_update(step.value);
        if step.finished {
            on_finished();
        }
        Some(step)
    }
}
